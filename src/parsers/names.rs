//! # 命名对照表读取
//!
//! 读取 `elements_names`、`ionisation_stages`、`initial_gap` 三个单列文本文件。
//! 每个文件都是可选的，缺失时使用内置对照。
//!
//! ## 依赖关系
//! - 被 `commands/context.rs` 使用
//! - 使用 `models/nomenclature.rs`

use crate::error::{AugerkitError, Result};
use crate::models::Nomenclature;

use std::fs;
use std::path::Path;

pub const ELEMENTS_FILE: &str = "elements_names";
pub const STAGES_FILE: &str = "ionisation_stages";
pub const SHELLS_FILE: &str = "initial_gap";

/// 从目录读取命名对照表
pub fn load_nomenclature(dir: &Path) -> Result<Nomenclature> {
    let mut names = Nomenclature::builtin();

    if let Some(elements) = read_name_list(&dir.join(ELEMENTS_FILE))? {
        names.elements = elements;
    }
    if let Some(stages) = read_name_list(&dir.join(STAGES_FILE))? {
        names.stages = stages;
    }
    if let Some(shells) = read_name_list(&dir.join(SHELLS_FILE))? {
        names.shells = shells;
    }

    Ok(names)
}

/// 读取单列名称文件；文件不存在时返回 None
fn read_name_list(path: &Path) -> Result<Option<Vec<String>>> {
    if !path.is_file() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| AugerkitError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(Some(parse_name_list(&content)))
}

/// 每个非空、非注释行的第一个字段
pub fn parse_name_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .filter_map(|l| l.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_list() {
        let names = parse_name_list("# shells\nK\n\nL_1\nL_2  extra\n");
        assert_eq!(names, vec!["K", "L_1", "L_2"]);
    }

    #[test]
    fn test_load_nomenclature_overrides() {
        let dir = std::env::temp_dir().join(format!("augerkit_names_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(SHELLS_FILE), "K\nL_1\nL_2\n").unwrap();

        let names = load_nomenclature(&dir).unwrap();
        assert_eq!(names.shell(2), "L_1");
        assert_eq!(names.parse_shell("L1").unwrap(), 2);
        // 未提供的文件使用内置对照
        assert_eq!(names.element(26), "Fe");
        assert_eq!(names.stage(3), "III");

        fs::remove_dir_all(&dir).ok();
    }
}
