use crate::data_model::DataSet;
use crate::mesh::Field;
use std::ops::Deref;
use std::sync::Arc;

/// The reserved name of the temporary distance field attached to a domain while it is clipped.
pub const CLIP_FIELD_NAME: &str = "__hoclip_clip_field__";

/// A temporary field attached to a domain for the lifetime of this guard.
///
/// The field is removed from the domain when the guard is dropped, including
/// when the clip pass exits early with an error.
pub struct ScratchField<'a> {
    domain: &'a mut DataSet,
}

impl<'a> ScratchField<'a> {
    /// Renames `field` to [`CLIP_FIELD_NAME`], associates it to `mesh_name`, and attaches it to `domain`.
    pub fn attach(domain: &'a mut DataSet, mut field: Box<dyn Field>, mesh_name: &str) -> Self {
        field.set_name(CLIP_FIELD_NAME.to_string());
        field.set_mesh_name(mesh_name.to_string());

        if domain.add_field(Arc::from(field)).is_some() {
            log::warn!(
                "domain {} already had a field named `{}`, it was replaced by the clip field",
                domain.domain_id(),
                CLIP_FIELD_NAME
            );
        }

        Self { domain }
    }
}

impl Deref for ScratchField<'_> {
    type Target = DataSet;

    fn deref(&self) -> &DataSet {
        self.domain
    }
}

impl Drop for ScratchField<'_> {
    fn drop(&mut self) {
        let _ = self.domain.remove_field(CLIP_FIELD_NAME);
    }
}
