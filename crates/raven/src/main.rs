use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use raven_db::{Diagnostic, File, check_file, structure_count};
use raven_errors::Renderer;
use raven_syntax::debug_tree;
use salsa::DatabaseImpl;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
enum Options {
    /// Parse a file and report diagnostics.
    Check { path: Utf8PathBuf },
    /// Print the syntax tree of a file.
    Dump { path: Utf8PathBuf },
}

fn main() -> anyhow::Result<()> {
    let db = DatabaseImpl::default();

    match Options::parse() {
        Options::Check { path } => {
            let file = read_file(&db, path)?;

            let renderer = Renderer::styled();
            let diagnostics = check_file::accumulated::<Diagnostic>(&db, file);

            let path = file.path(&db).as_str();
            let text = file.text(&db).as_str();

            for diagnostic in &diagnostics {
                eprintln!("{}", diagnostic.render(&renderer, path, text));
            }

            println!("{}: {} structures", path, structure_count(&db, file));

            if diagnostics.is_empty() { Ok(()) } else { anyhow::bail!("found errors in `{path}`") }
        }
        Options::Dump { path } => {
            let file = read_file(&db, path)?;
            print!("{}", debug_tree(&db, file.parse(&db)));
            Ok(())
        }
    }
}

fn read_file(db: &DatabaseImpl, path: Utf8PathBuf) -> anyhow::Result<File> {
    let text = std::fs::read_to_string(&path).with_context(|| format!("failed to read `{path}`"))?;
    Ok(File::new(db, path, text))
}
