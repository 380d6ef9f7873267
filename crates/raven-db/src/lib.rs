use camino::Utf8PathBuf;
pub use raven_errors::Diagnostic;
use raven_syntax::ast::{Module, Node as _, Structure};
use raven_syntax::visitor::{Visitor, visit, walk};
use raven_syntax::GreenNode;
use salsa::{Accumulator as _, Database};

#[salsa::input(debug)]
pub struct File {
    #[returns(ref)]
    pub path: Utf8PathBuf,
    #[returns(ref)]
    pub text: String,
}

#[salsa::tracked]
impl File {
    /// Parses the file, accumulating parse diagnostics.
    #[salsa::tracked]
    pub fn parse(self, db: &dyn Database) -> GreenNode<'_> {
        let parse = raven_parse::module(db, self.text(db));
        let green = parse.green();

        for diagnostic in parse.into_diagnostics() {
            diagnostic.accumulate(db);
        }

        green
    }
}

#[salsa::tracked]
pub fn check_file(db: &dyn Database, file: File) {
    _ = file.parse(db);
}

/// Number of structure declarations in the file, including nested ones,
/// counted through the typed visitor.
#[salsa::tracked]
pub fn structure_count(db: &dyn Database, file: File) -> usize {
    struct Count(usize);

    impl<'db> Visitor<'db> for Count {
        fn visit_structure(&mut self, db: &'db dyn Database, structure: Structure<'db>) {
            self.0 += 1;
            walk(self, db, structure.syntax());
        }
    }

    let module = Module::new(db, file.parse(db));
    let mut count = Count(0);
    visit(&mut count, db, module.syntax());
    count.0
}

#[cfg(test)]
mod tests {
    use salsa::DatabaseImpl;

    use super::*;

    #[test]
    fn check_file_accumulates_parse_diagnostics() {
        let db = DatabaseImpl::new();
        let file = File::new(&db, Utf8PathBuf::from("broken.rv"), "struct {}".to_owned());

        let diagnostics = check_file::accumulated::<Diagnostic>(&db, file);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message(), "expected identifier");
    }

    #[test]
    fn clean_files_have_no_diagnostics() {
        let db = DatabaseImpl::new();
        let file =
            File::new(&db, Utf8PathBuf::from("ok.rv"), "struct Unit {}".to_owned());

        assert!(check_file::accumulated::<Diagnostic>(&db, file).is_empty());
    }

    #[test]
    fn structures_are_counted_through_the_visitor() {
        let db = DatabaseImpl::new();
        let file = File::new(
            &db,
            Utf8PathBuf::from("count.rv"),
            "public struct A {} struct B {} fn solo() {}".to_owned(),
        );

        assert_eq!(structure_count(&db, file), 2);
    }
}
