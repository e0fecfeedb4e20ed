//! # inspect 命令实现
//!
//! 显示 Table 2 概况并检查：
//! - 概率总和是否超过 1
//! - 平均量表的 N_e 是否与 Table 2 一致
//! - 重复键
//!
//! ## 依赖关系
//! - 使用 `cli/inspect.rs` 定义的参数
//! - 使用 `analysis/check.rs`

use super::context::DataContext;
use crate::analysis::{check_table, TableReport};
use crate::cli::inspect::InspectArgs;
use crate::error::Result;
use crate::models::{IonKey, Nomenclature};
use crate::tables::AugerTable;
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Property")]
    property: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct ElementRow {
    #[tabled(rename = "Z")]
    z: u32,
    #[tabled(rename = "Element")]
    element: String,
    #[tabled(rename = "Stages")]
    stages: usize,
    #[tabled(rename = "Neutral-atom shells")]
    shells: String,
}

/// 执行 inspect 命令
pub fn execute(args: InspectArgs, ctx: &DataContext) -> Result<()> {
    output::print_header("Table Inspection");

    let averages = ctx.averages_on_disk()?;
    if averages.is_none() {
        output::print_info("No averages table on disk, skipping the N_e comparison");
    }

    let report = check_table(&ctx.table, averages.as_ref(), args.tolerance);
    print_summary(&report, &ctx.names);
    println!("{}", Table::new(element_rows(&ctx.table, &ctx.names)));

    list_entries(
        "Duplicate keys",
        &report.duplicates,
        args.top,
        &ctx.names,
        |(key, count)| (*key, format!("{} rows", count)),
    );
    list_entries(
        "Probability sums above 1",
        &report.over_unity,
        args.top,
        &ctx.names,
        |(key, total)| (*key, format!("sum = {:.4}", total)),
    );
    list_entries(
        "Mean electron numbers differing from Table 2",
        &report.mean_mismatches,
        args.top,
        &ctx.names,
        |(key, expected, found)| (*key, format!("Table 2 {:.4}, averages {:.4}", expected, found)),
    );
    list_entries(
        "Keys absent from the averages table",
        &report.missing_averages,
        args.top,
        &ctx.names,
        |key| (*key, String::new()),
    );

    output::print_separator();
    if report.is_consistent() {
        output::print_success("Table is consistent");
    } else {
        output::print_warning(&format!(
            "{} probability sums above 1, {} mean-count mismatches",
            report.over_unity.len(),
            report.mean_mismatches.len()
        ));
    }

    Ok(())
}

fn print_summary(report: &TableReport, names: &Nomenclature) {
    let z_span = match (report.elements.first(), report.elements.last()) {
        (Some(first), Some(last)) => format!(
            "{} ({}) .. {} ({})",
            first,
            names.element(*first),
            last,
            names.element(*last)
        ),
        _ => "-".to_string(),
    };

    let rows = vec![
        SummaryRow {
            property: "Rows".to_string(),
            value: report.rows.to_string(),
        },
        SummaryRow {
            property: "Distinct keys".to_string(),
            value: report.keys.to_string(),
        },
        SummaryRow {
            property: "Elements".to_string(),
            value: report.elements.len().to_string(),
        },
        SummaryRow {
            property: "Atomic numbers".to_string(),
            value: z_span,
        },
        SummaryRow {
            property: "Shells".to_string(),
            value: report
                .shells
                .iter()
                .map(|s| names.shell(*s))
                .collect::<Vec<_>>()
                .join(" "),
        },
        SummaryRow {
            property: "Duplicate keys".to_string(),
            value: report.duplicates.len().to_string(),
        },
    ];

    println!("{}", Table::new(rows));
}

/// 每个元素的电离级数目与中性原子的空穴壳层
fn element_rows(table: &AugerTable, names: &Nomenclature) -> Vec<ElementRow> {
    table
        .elements()
        .into_iter()
        .map(|z| ElementRow {
            z,
            element: names.element(z),
            stages: table.stages(z).len(),
            shells: table
                .shells(z, 1)
                .iter()
                .map(|s| names.shell(*s))
                .collect::<Vec<_>>()
                .join(" "),
        })
        .collect()
}

/// 列出前 `top` 项
fn list_entries<T>(
    title: &str,
    entries: &[T],
    top: usize,
    names: &Nomenclature,
    describe: impl Fn(&T) -> (IonKey, String),
) {
    if entries.is_empty() {
        return;
    }

    output::print_warning(&format!("{}: {}", title, entries.len()));
    for entry in entries.iter().take(top) {
        let (key, detail) = describe(entry);
        let (element, stage, gap) = names.correspondence(key.z, key.stage, key.shell);
        output::print_info(&format!("  {} {} {}-shell ({})  {}", element, stage, gap, key, detail));
    }
    if entries.len() > top {
        output::print_warning(&format!("  ... and {} more", entries.len() - top));
    }
}
