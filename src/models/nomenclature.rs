//! # 命名对照表
//!
//! 将 (Z, st, s) 数值转换为元素符号、光谱电离级（罗马数字）和壳层名称，
//! 并反向解析用户输入（如 `Fe XII`、`L_1`）。
//!
//! ## 依赖关系
//! - 被 `parsers/names.rs` 构造
//! - 被 `commands/` 用于图例、标题和文件名
//! - 使用 `regex` 解析离子写法

use crate::error::{AugerkitError, Result};

use regex::Regex;

/// 内置元素符号 (H..Zn)，覆盖 Table 2 的全部元素
const BUILTIN_ELEMENTS: [&str; 30] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn",
];

/// 内置壳层名称，下标 s-1 (1s, 2s, 2p, 3s, 3p, 3d, 4s)
const BUILTIN_SHELLS: [&str; 7] = ["K", "L1", "L23", "M1", "M23", "M45", "N1"];

/// 按 j 细分的子壳层名称 -> 合并后的壳层名称
const SHELL_ALIASES: [(&str, &str); 6] = [
    ("L2", "L23"),
    ("L3", "L23"),
    ("M2", "M23"),
    ("M3", "M23"),
    ("M4", "M45"),
    ("M5", "M45"),
];

/// 数值到名称的对照
#[derive(Debug, Clone)]
pub struct Nomenclature {
    pub elements: Vec<String>,
    pub stages: Vec<String>,
    pub shells: Vec<String>,
}

impl Default for Nomenclature {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Nomenclature {
    /// 内置对照表；电离级名称在查询时按需生成
    pub fn builtin() -> Self {
        Nomenclature {
            elements: BUILTIN_ELEMENTS.iter().map(|s| s.to_string()).collect(),
            stages: Vec::new(),
            shells: BUILTIN_SHELLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// 元素符号
    pub fn element(&self, z: u32) -> String {
        index(&self.elements, z).unwrap_or_else(|| format!("Z{}", z))
    }

    /// 电离级名称
    pub fn stage(&self, stage: u32) -> String {
        index(&self.stages, stage).unwrap_or_else(|| to_roman(stage))
    }

    /// 壳层名称
    pub fn shell(&self, shell: u32) -> String {
        index(&self.shells, shell).unwrap_or_else(|| format!("S{}", shell))
    }

    /// (Z, st, s) -> (元素, 电离级, 壳层)
    pub fn correspondence(&self, z: u32, stage: u32, shell: u32) -> (String, String, String) {
        (self.element(z), self.stage(stage), self.shell(shell))
    }

    /// 解析元素：符号（不区分大小写）或原子序数
    pub fn parse_element(&self, input: &str) -> Result<u32> {
        let input = input.trim();
        if let Ok(z) = input.parse::<u32>() {
            if z == 0 {
                return Err(AugerkitError::UnknownElement(input.to_string()));
            }
            return Ok(z);
        }

        self.elements
            .iter()
            .position(|e| e.eq_ignore_ascii_case(input))
            .map(|i| i as u32 + 1)
            .ok_or_else(|| AugerkitError::UnknownElement(input.to_string()))
    }

    /// 解析壳层：名称 (`K`, `L1`, `L_1`, `L3`) 或编号
    pub fn parse_shell(&self, input: &str) -> Result<u32> {
        let input = input.trim();
        if let Ok(s) = input.parse::<u32>() {
            if s == 0 {
                return Err(AugerkitError::UnknownShell(input.to_string()));
            }
            return Ok(s);
        }

        let wanted = normalize_shell(input);
        let find = |target: &str| {
            self.shells
                .iter()
                .position(|name| normalize_shell(name) == target)
                .map(|i| i as u32 + 1)
        };

        find(wanted.as_str())
            .or_else(|| {
                SHELL_ALIASES
                    .iter()
                    .find(|(sub, _)| *sub == wanted)
                    .and_then(|(_, merged)| find(*merged))
            })
            .ok_or_else(|| AugerkitError::UnknownShell(input.to_string()))
    }

    /// 解析离子写法，返回 (Z, st)
    ///
    /// 支持 `Fe I`、`Fe XII`、`Fe12`、`Fe`（中性）、`26 1`、`26`。
    pub fn parse_ion(&self, input: &str) -> Result<(u32, u32)> {
        let text = input.trim();
        let invalid = || AugerkitError::InvalidIon(input.to_string());

        let numeric = Regex::new(r"^(\d+)(?:\s+(\d+))?$")
            .map_err(|e| AugerkitError::Other(e.to_string()))?;
        if let Some(caps) = numeric.captures(text) {
            let z: u32 = caps[1].parse().map_err(|_| invalid())?;
            let stage = match caps.get(2) {
                Some(m) => m.as_str().parse().map_err(|_| invalid())?,
                None => 1,
            };
            if z == 0 || stage == 0 {
                return Err(invalid());
            }
            return Ok((z, stage));
        }

        let symbolic = Regex::new(r"^([A-Za-z][a-z]?)\s*([IVXLCivxlc]+|\d+)?$")
            .map_err(|e| AugerkitError::Other(e.to_string()))?;
        let caps = symbolic.captures(text).ok_or_else(invalid)?;

        let z = self.parse_element(&caps[1])?;
        let stage = match caps.get(2) {
            None => 1,
            Some(m) => {
                let s = m.as_str();
                match s.parse::<u32>() {
                    Ok(n) => n,
                    Err(_) => from_roman(s).ok_or_else(invalid)?,
                }
            }
        };
        if stage == 0 {
            return Err(invalid());
        }

        Ok((z, stage))
    }
}

/// 1-based 下标查表
fn index(names: &[String], n: u32) -> Option<String> {
    if n == 0 {
        return None;
    }
    names.get(n as usize - 1).cloned()
}

fn normalize_shell(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// 整数转罗马数字
pub fn to_roman(mut n: u32) -> String {
    const TABLE: [(u32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut out = String::new();
    for (value, symbol) in TABLE {
        while n >= value {
            out.push_str(symbol);
            n -= value;
        }
    }
    out
}

/// 罗马数字转整数（只接受规范写法）
pub fn from_roman(s: &str) -> Option<u32> {
    let upper = s.to_uppercase();
    let mut total = 0u32;
    let mut prev = 0u32;

    for c in upper.chars().rev() {
        let v = match c {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            _ => return None,
        };
        if v < prev {
            total = total.checked_sub(v)?;
        } else {
            total += v;
            prev = v;
        }
    }

    (total > 0 && to_roman(total) == upper).then_some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correspondence() {
        let names = Nomenclature::builtin();
        let (el, st, gap) = names.correspondence(26, 1, 1);
        assert_eq!(el, "Fe");
        assert_eq!(st, "I");
        assert_eq!(gap, "K");

        let (el, st, gap) = names.correspondence(24, 12, 3);
        assert_eq!(el, "Cr");
        assert_eq!(st, "XII");
        assert_eq!(gap, "L23");
    }

    #[test]
    fn test_fallback_labels() {
        let names = Nomenclature::builtin();
        assert_eq!(names.element(92), "Z92");
        assert_eq!(names.shell(40), "S40");
        assert_eq!(names.shell(8), "S8");
        assert_eq!(names.stage(26), "XXVI");
    }

    #[test]
    fn test_roman_roundtrip_edges() {
        assert_eq!(to_roman(4), "IV");
        assert_eq!(to_roman(29), "XXIX");
        assert_eq!(from_roman("xiv"), Some(14));
        assert_eq!(from_roman("IIII"), None);
        assert_eq!(from_roman("ABC"), None);
    }

    #[test]
    fn test_parse_ion() {
        let names = Nomenclature::builtin();
        assert_eq!(names.parse_ion("Fe I").unwrap(), (26, 1));
        assert_eq!(names.parse_ion("Cr XII").unwrap(), (24, 12));
        assert_eq!(names.parse_ion("Fe12").unwrap(), (26, 12));
        assert_eq!(names.parse_ion("CIV").unwrap(), (6, 4));
        assert_eq!(names.parse_ion("Ni").unwrap(), (28, 1));
        assert_eq!(names.parse_ion("NiII").unwrap(), (28, 2));
        assert_eq!(names.parse_ion("26 3").unwrap(), (26, 3));
        assert_eq!(names.parse_ion("26").unwrap(), (26, 1));
        assert!(names.parse_ion("Xx I").is_err());
        assert!(names.parse_ion("Fe IIII").is_err());
        assert!(names.parse_ion("").is_err());
    }

    #[test]
    fn test_builtin_shell_numbering() {
        let names = Nomenclature::builtin();
        let labels: Vec<String> = (3..=7).map(|s| names.shell(s)).collect();
        assert_eq!(labels, vec!["L23", "M1", "M23", "M45", "N1"]);
    }

    #[test]
    fn test_parse_shell() {
        let names = Nomenclature::builtin();
        assert_eq!(names.parse_shell("K").unwrap(), 1);
        assert_eq!(names.parse_shell("L_1").unwrap(), 2);
        assert_eq!(names.parse_shell("m1").unwrap(), 4);
        assert_eq!(names.parse_shell("L3").unwrap(), 3);
        assert_eq!(names.parse_shell("M_5").unwrap(), 6);
        assert_eq!(names.parse_shell("N1").unwrap(), 7);
        assert_eq!(names.parse_shell("3").unwrap(), 3);
        assert!(names.parse_shell("Q").is_err());
        assert!(names.parse_shell("0").is_err());
    }
}
