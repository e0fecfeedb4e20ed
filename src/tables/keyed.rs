//! # 按 (Z, st, s) 查询的只读表
//!
//! 数据载入一次后只读，查询为线性过滤。键的唯一性是假定而非强制：
//! 单行查询取第一个匹配行，聚合查询使用全部匹配行，
//! `duplicate_keys` 仅用于报告。
//!
//! ## 依赖关系
//! - 被 `parsers/` 构造
//! - 被 `analysis/` 和 `commands/` 查询
//! - 使用 `models/ionisation.rs` 的 IonKey

use crate::error::{AugerkitError, Result};
use crate::models::{AugerRecord, AverageRecord, IonKey};

use std::collections::{BTreeSet, HashMap};

/// 带有查表键的行
pub trait Keyed {
    fn key(&self) -> IonKey;
}

impl Keyed for AugerRecord {
    fn key(&self) -> IonKey {
        self.key
    }
}

impl Keyed for AverageRecord {
    fn key(&self) -> IonKey {
        self.key
    }
}

/// 按键查询的表
#[derive(Debug, Clone)]
pub struct KeyedTable<R> {
    rows: Vec<R>,
}

/// Table 2
pub type AugerTable = KeyedTable<AugerRecord>;

/// 导出平均量表
pub type AverageTable = KeyedTable<AverageRecord>;

impl<R: Keyed> KeyedTable<R> {
    pub fn new(rows: Vec<R>) -> Self {
        KeyedTable { rows }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 第一个匹配行
    pub fn lookup(&self, key: IonKey) -> Result<&R> {
        self.rows
            .iter()
            .find(|r| r.key() == key)
            .ok_or(AugerkitError::KeyNotFound {
                z: key.z,
                stage: key.stage,
                shell: key.shell,
            })
    }

    /// 所有匹配行（文件顺序）
    pub fn matching(&self, key: IonKey) -> impl Iterator<Item = &R> + '_ {
        self.rows.iter().filter(move |r| r.key() == key)
    }

    /// 表中出现的原子序数（升序）
    pub fn elements(&self) -> Vec<u32> {
        self.rows
            .iter()
            .map(|r| r.key().z)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// 某元素出现的电离级（升序）
    pub fn stages(&self, z: u32) -> Vec<u32> {
        self.rows
            .iter()
            .map(|r| r.key())
            .filter(|k| k.z == z)
            .map(|k| k.stage)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// 某离子出现的壳层（升序）
    pub fn shells(&self, z: u32, stage: u32) -> Vec<u32> {
        self.rows
            .iter()
            .map(|r| r.key())
            .filter(|k| k.z == z && k.stage == stage)
            .map(|k| k.shell)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// 不重复的键（首次出现顺序）
    pub fn keys(&self) -> Vec<IonKey> {
        let mut seen = BTreeSet::new();
        self.rows
            .iter()
            .map(|r| r.key())
            .filter(|k| seen.insert(*k))
            .collect()
    }

    /// 出现多于一次的键及其次数（升序）
    pub fn duplicate_keys(&self) -> Vec<(IonKey, usize)> {
        let mut counts: HashMap<IonKey, usize> = HashMap::new();
        for row in &self.rows {
            *counts.entry(row.key()).or_insert(0) += 1;
        }

        let mut dups: Vec<(IonKey, usize)> = counts.into_iter().filter(|(_, n)| *n > 1).collect();
        dups.sort();
        dups
    }
}
