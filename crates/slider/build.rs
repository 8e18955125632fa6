use std::fs;
use std::path::{Path, PathBuf};

use clap::CommandFactory;

// The clap tree only needs clap + clap_complete, both build-dependencies.
#[path = "src/cli.rs"]
#[allow(dead_code)]
mod cli;

fn main() {
    println!("cargo::rerun-if-changed=src/cli.rs");

    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").expect("cargo sets OUT_DIR"));
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).expect("create man page directory");

    write_man_pages(cli::Cli::command(), &man_dir);
}

/// One page per visible command: `slider.1`, `slider-products.1`,
/// `slider-config-init.1`, ...
fn write_man_pages(root: clap::Command, dir: &Path) {
    let mut pending = vec![root];

    while let Some(cmd) = pending.pop() {
        let page_name = cmd.get_name().to_owned();

        pending.extend(
            cmd.get_subcommands()
                .filter(|sub| !sub.is_hide_set())
                .map(|sub| {
                    let name = format!("{page_name}-{}", sub.get_name());
                    sub.clone().name(name)
                }),
        );

        let mut page = Vec::new();
        clap_mangen::Man::new(cmd)
            .render(&mut page)
            .unwrap_or_else(|e| panic!("render man page {page_name}: {e}"));

        let path = dir.join(format!("{page_name}.1"));
        fs::write(&path, page).unwrap_or_else(|e| panic!("write {}: {e}", path.display()));
    }
}
