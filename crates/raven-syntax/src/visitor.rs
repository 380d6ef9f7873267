//! Kind-dispatched visitation over red trees.
//!
//! Every per-production method defaults to the generic child walk, so a
//! visitor opts into a typed callback by overriding the matching method.
//! [`visit`] is the generic entry point: it routes a node to the callback
//! for its kind and leaves everything else to [`Visitor::visit_node`].

use salsa::Database;

use crate::SyntaxKind::*;
use crate::ast::{Field, Function, Modifier, Module, Node as _, Structure};
use crate::{Red, RedNode};

pub trait Visitor<'db>: Sized {
    fn visit_module(&mut self, db: &'db dyn Database, module: Module<'db>) {
        walk(self, db, module.syntax());
    }

    fn visit_structure(&mut self, db: &'db dyn Database, structure: Structure<'db>) {
        walk(self, db, structure.syntax());
    }

    fn visit_modifier(&mut self, db: &'db dyn Database, modifier: Modifier<'db>) {
        walk(self, db, modifier.syntax());
    }

    fn visit_field(&mut self, db: &'db dyn Database, field: Field<'db>) {
        walk(self, db, field.syntax());
    }

    fn visit_function(&mut self, db: &'db dyn Database, function: Function<'db>) {
        walk(self, db, function.syntax());
    }

    /// Fallback for node kinds without a dedicated callback.
    fn visit_node(&mut self, db: &'db dyn Database, node: RedNode<'db>) {
        walk(self, db, node);
    }
}

/// Routes `node` to the typed callback for its kind.
pub fn visit<'db, V: Visitor<'db>>(visitor: &mut V, db: &'db dyn Database, node: RedNode<'db>) {
    match node.kind(db) {
        MODULE => {
            if let Some(module) = Module::cast(db, node) {
                visitor.visit_module(db, module);
            }
        }
        STRUCTURE => {
            if let Some(structure) = Structure::cast(db, node) {
                visitor.visit_structure(db, structure);
            }
        }
        MODIFIER => {
            if let Some(modifier) = Modifier::cast(db, node) {
                visitor.visit_modifier(db, modifier);
            }
        }
        FIELD => {
            if let Some(field) = Field::cast(db, node) {
                visitor.visit_field(db, field);
            }
        }
        FN => {
            if let Some(function) = Function::cast(db, node) {
                visitor.visit_function(db, function);
            }
        }
        _ => visitor.visit_node(db, node),
    }
}

/// Visits the immediate child nodes of `node`, left to right.
pub fn walk<'db, V: Visitor<'db>>(visitor: &mut V, db: &'db dyn Database, node: RedNode<'db>) {
    for child in node.children(db).filter_map(Red::into_node) {
        visit(visitor, db, child);
    }
}
