use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use distcalc::api::Calculation;
use distcalc::loader::Rejected;
use distcalc::model::{Figure, WeightDistribution};

pub fn print_figure_table(calc: &Calculation) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Point").add_attribute(Attribute::Bold),
        Cell::new("Weight"),
        Cell::new("%").fg(Color::Cyan),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (figure, wf) in calc.distribution.iter() {
        let name = Cell::new(figure.label());
        let name = if figure == Figure::Cross {
            name.add_attribute(Attribute::Bold)
        } else {
            name
        };
        table.add_row(vec![
            name,
            Cell::new(wf.weight),
            Cell::new(wf.percentage).fg(Color::Cyan),
        ]);
    }

    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(calc.total).add_attribute(Attribute::Bold),
        Cell::new("100.0"),
    ]);

    println!("{}", table);
}

/// One row per car, sorted by how far the cross weight sits from 50 %.
pub fn print_batch_report(results: &[(String, WeightDistribution)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Car").add_attribute(Attribute::Bold),
        Cell::new("Front %"),
        Cell::new("Rear %"),
        Cell::new("Left %"),
        Cell::new("Right %"),
        Cell::new("Cross %").fg(Color::Cyan),
        Cell::new("Cross Δ").fg(Color::Yellow),
    ]);

    for i in 1..=6 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let mut rows: Vec<&(String, WeightDistribution)> = results.iter().collect();
    rows.sort_by_key(|(_, d)| cross_offset_tenths(d));

    for (name, d) in rows {
        let offset = cross_offset_tenths(d);
        let offset_color = if offset <= 10 { Color::Green } else { Color::Red };

        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(d.front_total.percentage),
            Cell::new(d.rear_total.percentage),
            Cell::new(d.left_side.percentage),
            Cell::new(d.right_side.percentage),
            Cell::new(d.cross.percentage).fg(Color::Cyan),
            Cell::new(format!("{}.{}", offset / 10, offset % 10)).fg(offset_color),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_rejected(rejected: &[Rejected]) {
    if rejected.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new("Line"),
        Cell::new("Car"),
        Cell::new("Problem").fg(Color::Red),
    ]);
    for r in rejected {
        table.add_row(vec![
            Cell::new(r.line),
            Cell::new(&r.label),
            Cell::new(&r.error).fg(Color::Red),
        ]);
    }
    println!("\n{}", table);
}

fn cross_offset_tenths(d: &WeightDistribution) -> u64 {
    d.cross.percentage.tenths().abs_diff(500)
}
