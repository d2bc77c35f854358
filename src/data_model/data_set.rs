use crate::mesh::{Field, Mesh};
use std::sync::Arc;

/// A single domain: an optional mesh together with the named fields defined on it.
///
/// Meshes and fields are shared through reference-counted handles. Cloning a
/// `DataSet` clones the handles, so adding or removing fields on a clone never
/// affects the original domain.
#[derive(Clone, Debug, Default)]
pub struct DataSet {
    domain_id: i32,
    mesh: Option<Arc<dyn Mesh>>,
    fields: Vec<Arc<dyn Field>>,
}

impl DataSet {
    /// Creates an empty domain with the domain id `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a domain holding the given mesh and no field.
    pub fn with_mesh(mesh: Arc<dyn Mesh>) -> Self {
        Self {
            mesh: Some(mesh),
            ..Self::default()
        }
    }

    /// The identifier of this domain within the distributed collection.
    #[inline]
    pub fn domain_id(&self) -> i32 {
        self.domain_id
    }

    /// Sets the identifier of this domain.
    pub fn set_domain_id(&mut self, domain_id: i32) {
        self.domain_id = domain_id;
    }

    /// The mesh of this domain, if any.
    #[inline]
    pub fn mesh(&self) -> Option<&Arc<dyn Mesh>> {
        self.mesh.as_ref()
    }

    /// Does this domain have a mesh?
    #[inline]
    pub fn has_mesh(&self) -> bool {
        self.mesh.is_some()
    }

    /// Sets the mesh of this domain, returning the previous one.
    pub fn set_mesh(&mut self, mesh: Arc<dyn Mesh>) -> Option<Arc<dyn Mesh>> {
        self.mesh.replace(mesh)
    }

    /// Adds a field to this domain.
    ///
    /// A field with the same name is replaced and returned.
    pub fn add_field(&mut self, field: Arc<dyn Field>) -> Option<Arc<dyn Field>> {
        match self.fields.iter_mut().find(|f| f.name() == field.name()) {
            Some(existing) => Some(std::mem::replace(existing, field)),
            None => {
                self.fields.push(field);
                None
            }
        }
    }

    /// Removes the field named `name`, returning it if it existed.
    pub fn remove_field(&mut self, name: &str) -> Option<Arc<dyn Field>> {
        let i = self.fields.iter().position(|f| f.name() == name)?;
        Some(self.fields.remove(i))
    }

    /// Does this domain hold a field named `name`?
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// The field named `name`, if any.
    pub fn field(&self, name: &str) -> Option<&Arc<dyn Field>> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// All the fields of this domain, in insertion order.
    pub fn fields(&self) -> &[Arc<dyn Field>] {
        &self.fields
    }

    /// The names of all the fields of this domain, in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|f| f.name())
    }

    /// The number of fields of this domain.
    pub fn number_of_fields(&self) -> usize {
        self.fields.len()
    }
}
