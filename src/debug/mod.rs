//! Human-readable dumps of domains, for debugging.

use crate::data_model::DataSet;
use crate::mesh::{Field, Mesh};
use std::borrow::Cow;
use std::io;
use std::sync::Arc;

#[derive(Clone)]
enum DomainNode<'a> {
    Domain(&'a DataSet),
    Mesh(&'a dyn Mesh),
    Field(&'a dyn Field),
    Missing(&'static str),
}

impl ptree::TreeItem for DomainNode<'_> {
    type Child = Self;

    fn write_self<W: io::Write>(&self, f: &mut W, _style: &ptree::Style) -> io::Result<()> {
        match self {
            DomainNode::Domain(ds) => write!(f, "domain {}", ds.domain_id()),
            DomainNode::Mesh(mesh) => {
                let bounds = mesh.bounds();
                write!(
                    f,
                    "mesh `{}` {:?} order {}: {} elements, {} control points, bounds [{:.3}, {:.3}, {:.3}] -> [{:.3}, {:.3}, {:.3}]",
                    mesh.name(),
                    mesh.mesh_type(),
                    mesh.order(),
                    mesh.cells(),
                    mesh.dof_count(),
                    bounds.mins.x,
                    bounds.mins.y,
                    bounds.mins.z,
                    bounds.maxs.x,
                    bounds.maxs.y,
                    bounds.maxs.z,
                )
            }
            DomainNode::Field(field) => {
                write!(
                    f,
                    "field `{}` on `{}` ({} order {}): {} values",
                    field.name(),
                    field.mesh_name(),
                    field.element_name(),
                    field.order(),
                    field.dof_data().dof_count()
                )?;
                match field.range() {
                    Some((lo, hi)) => write!(f, " in [{}, {}]", lo, hi),
                    None => Ok(()),
                }
            }
            DomainNode::Missing(what) => write!(f, "<no {}>", what),
        }
    }

    fn children(&self) -> Cow<[Self::Child]> {
        match self {
            DomainNode::Domain(ds) => {
                let ds = *ds;
                let mut children = vec![match ds.mesh() {
                    Some(mesh) => DomainNode::Mesh(&**mesh),
                    None => DomainNode::Missing("mesh"),
                }];
                children.extend(
                    ds.fields()
                        .iter()
                        .map(|f: &Arc<dyn Field>| DomainNode::Field(&**f)),
                );
                Cow::from(children)
            }
            _ => Cow::from(vec![]),
        }
    }
}

/// Writes a tree describing the mesh and the fields of `domain` to `out`.
pub fn write_domain_tree<W: io::Write>(domain: &DataSet, out: &mut W) -> io::Result<()> {
    ptree::write_tree_with(
        &DomainNode::Domain(domain),
        out,
        &ptree::PrintConfig::default(),
    )
}
