//! Rendering a [`ClassProperties`] result as text or JSON for the CLI.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use serde::Serialize;

use crate::category::Category;
use crate::property::ClassProperties;

#[derive(Serialize)]
pub struct PropertyReport {
    pub name: String,
    pub type_tag: String,
    pub count: u32,
    pub is_static: bool,
    pub method_categories: Vec<String>,
}

#[derive(Serialize)]
pub struct ClassReport {
    pub class_name: String,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub properties: Vec<PropertyReport>,
}

fn method_tags(bits: u32) -> Vec<String> {
    (0..25)
        .map(|n| 1u32 << n)
        .filter(|&bit| bits & bit != 0)
        .filter_map(Category::from_bit)
        .map(|c| c.as_tag().to_string())
        .collect()
}

pub fn build_report(properties: &ClassProperties, generated_at: chrono::DateTime<chrono::Utc>) -> ClassReport {
    let rows = properties
        .properties
        .iter()
        .map(|p| PropertyReport {
            name: p.name.to_string(),
            type_tag: format!("{:?}", p.value_type.base),
            count: p.count,
            is_static: p.is_static,
            method_categories: method_tags(p.all_methods()),
        })
        .collect();

    ClassReport {
        class_name: properties.class_name.to_string(),
        generated_at,
        properties: rows,
    }
}

pub fn render_text(report: &ClassReport) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        Cell::new("Property"),
        Cell::new("Type"),
        Cell::new("Count"),
        Cell::new("Methods"),
    ]);

    for p in &report.properties {
        table.add_row(vec![
            Cell::new(&p.name),
            Cell::new(&p.type_tag),
            Cell::new(p.count.to_string()),
            Cell::new(p.method_categories.join(", ")),
        ]);
    }

    format!(
        "{} {}\n{table}",
        "class".bold(),
        report.class_name.cyan()
    )
}

pub fn render_json(report: &ClassReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
