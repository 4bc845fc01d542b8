use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, Table};
use matchboard::catalog::TokenCatalog;

pub fn print_catalog(catalog: &TokenCatalog) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["id", "glyph", "tint", "role"]);

    for def in catalog.tokens() {
        table.add_row(vec![
            Cell::new(&def.id),
            Cell::new(&def.glyph),
            Cell::new(&def.tint),
            Cell::new(def.role.to_string()),
        ]);
    }
    println!("{}", table);
}
