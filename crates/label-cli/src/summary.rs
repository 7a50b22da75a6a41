use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use label_history::{HistoryEntry, Overlap, PrintHistory};
use label_model::{Batch, Catalog, CodeEntry, LabelRecord};

use crate::cli::CatalogTableArg;

pub fn print_batch_header(batch: &Batch) {
    let class = &batch.class;
    println!("Major type: {} ({}, {})", class.major_name, class.major_code, class.family);
    if !class.subtype_code.is_empty() {
        println!("Subtype: {}", class.subtype_code);
    }
    match (batch.first_serial(), batch.last_serial()) {
        (Some(first), Some(last)) => println!("Labels: {} ({first} .. {last})", batch.len()),
        _ => println!("Labels: 0"),
    }
}

pub fn print_batch_preview(batch: &Batch) {
    print_batch_header(batch);

    let columns = OptionalColumns::for_batch(batch);
    let mut headers = vec![header_cell("Index"), header_cell("Serial"), header_cell("Full serial")];
    for (enabled, label) in columns.labels() {
        if enabled {
            headers.push(header_cell(label));
        }
    }
    let mut table = Table::new();
    table.set_header(headers);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);

    for record in batch {
        let mut row = vec![
            Cell::new(record.index),
            Cell::new(record.serial),
            Cell::new(&record.full_serial)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
        ];
        row.extend(columns.cells(record));
        table.add_row(row);
    }
    println!("{table}");
}

/// Family columns shown only when some record carries the field.
struct OptionalColumns {
    mac: bool,
    roc: bool,
    magazine: bool,
    tile_size: bool,
    tile_batch: bool,
    stage: bool,
}

impl OptionalColumns {
    fn for_batch(batch: &Batch) -> Self {
        let any = |f: fn(&LabelRecord) -> bool| batch.iter().any(f);
        Self {
            mac: any(|r| r.mac_code.is_some()),
            roc: any(|r| r.roc_version.is_some()),
            magazine: any(|r| r.magazine_code.is_some()),
            tile_size: any(|r| r.tile_size.is_some()),
            tile_batch: any(|r| r.tile_batch.is_some()),
            stage: any(|r| r.stage.is_some()),
        }
    }

    fn labels(&self) -> [(bool, &'static str); 6] {
        [
            (self.mac, "MAC"),
            (self.roc, "ROC"),
            (self.magazine, "Magazine"),
            (self.tile_size, "Size"),
            (self.tile_batch, "Tile batch"),
            (self.stage, "Stage"),
        ]
    }

    fn cells(&self, record: &LabelRecord) -> Vec<Cell> {
        let values = [
            (self.mac, record.mac_code.clone()),
            (self.roc, record.roc_version.clone()),
            (self.magazine, record.magazine_code.clone()),
            (self.tile_size, record.tile_size.map(|v| v.to_string())),
            (self.tile_batch, record.tile_batch.map(|v| v.to_string())),
            (self.stage, record.stage.map(|stage| stage.to_string())),
        ];
        values
            .into_iter()
            .filter(|(enabled, _)| *enabled)
            .map(|(_, value)| value.map_or_else(|| dim_cell("-"), Cell::new))
            .collect()
    }
}

pub fn print_overlap(overlap: &Overlap, history: &PrintHistory) {
    if !overlap.has_overlap {
        println!(
            "No collisions with {} previously printed serials.",
            history.distinct_len()
        );
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Already printed"), header_cell("Last printed")]);
    apply_table_style(&mut table);
    for serial in &overlap.colliding {
        let last = history
            .entries()
            .iter()
            .rev()
            .find(|entry| &entry.serial == serial)
            .and_then(|entry| entry.printed_at)
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string());
        table.add_row(vec![
            Cell::new(serial).fg(Color::Red).add_attribute(Attribute::Bold),
            last.map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    println!("{table}");
    println!(
        "{} of the batch's serials were printed before.",
        overlap.colliding.len()
    );
}

pub fn print_history(entries: &[HistoryEntry], total: usize) {
    if entries.is_empty() {
        println!("Print history is empty.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Serial"),
        header_cell("Printed at"),
        header_cell("Batch"),
    ]);
    apply_table_style(&mut table);
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.serial),
            entry
                .printed_at
                .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
                .map_or_else(|| dim_cell("-"), Cell::new),
            entry
                .batch
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    println!("{table}");
    println!("Showing {} of {total} entries.", entries.len());
}

pub fn print_catalog(catalog: &Catalog, only: Option<CatalogTableArg>) {
    let wanted = |table: CatalogTableArg| only.is_none_or(|only| only == table);

    if wanted(CatalogTableArg::Majors) {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Major type"),
            header_cell("Code"),
            header_cell("Number"),
            header_cell("Family"),
            header_cell("Batch unit"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 2, CellAlignment::Right);
        align_column(&mut table, 4, CellAlignment::Right);
        for major in &catalog.majors {
            table.add_row(vec![
                Cell::new(&major.name),
                Cell::new(&major.code).add_attribute(Attribute::Bold),
                Cell::new(major.serial_number),
                Cell::new(major.family),
                Cell::new(major.family.batch_unit()),
            ]);
        }
        print_section("Major types", &table);
    }
    if wanted(CatalogTableArg::Subtypes) {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Major type"),
            header_cell("Subtype"),
            header_cell("Code"),
            header_cell("Number"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 3, CellAlignment::Right);
        for subtype in &catalog.subtypes {
            table.add_row(vec![
                Cell::new(&subtype.major),
                Cell::new(&subtype.name),
                Cell::new(&subtype.code).add_attribute(Attribute::Bold),
                Cell::new(subtype.serial_number),
            ]);
        }
        print_section("Subtypes", &table);
    }
    let code_tables: [(CatalogTableArg, &str, &[CodeEntry]); 4] = [
        (CatalogTableArg::Macs, "MACs", &catalog.macs),
        (CatalogTableArg::Vendors, "Vendors", &catalog.vendors),
        (CatalogTableArg::Assemblers, "Assemblers", &catalog.assemblers),
        (CatalogTableArg::Shapes, "Shapes", &catalog.shapes),
    ];
    for (kind, title, entries) in code_tables {
        if wanted(kind) {
            print_section(title, &code_table(entries));
        }
    }
    if wanted(CatalogTableArg::Magazines) {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Position"), header_cell("Magazine")]);
        apply_table_style(&mut table);
        align_column(&mut table, 0, CellAlignment::Right);
        for (position, magazine) in catalog.magazines.iter().enumerate() {
            table.add_row(vec![Cell::new(position + 1), Cell::new(magazine)]);
        }
        print_section("Magazines", &table);
    }
}

fn code_table(entries: &[CodeEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Name"), header_cell("Code")]);
    apply_table_style(&mut table);
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.name),
            Cell::new(&entry.code).add_attribute(Attribute::Bold),
        ]);
    }
    table
}

fn print_section(title: &str, table: &Table) {
    println!("{title}:");
    if table.row_count() == 0 {
        println!("  (none)");
    } else {
        println!("{table}");
    }
    println!();
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
