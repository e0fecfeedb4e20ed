//! # 内壳层电离数据模型
//!
//! 表示 Kaastra & Mewe (1993) Table 2 的一行，以及由其导出的平均量表的一行。
//!
//! 表中概率与荧光产额都乘以了 10000 存储，这里保留原始值，
//! 由访问方法负责缩放。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `tables/`, `analysis/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;

/// 表中概率和产额的缩放因子
pub const TABLE_SCALE: f64 = 10000.0;

/// 发射电子数的最大值（概率列数）
pub const MAX_ELECTRONS: usize = 10;

/// 查表键 (Z, st, s)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IonKey {
    /// 原子序数
    pub z: u32,
    /// 电离级（1 = 中性原子）
    pub stage: u32,
    /// 初始空穴所在壳层编号（1 = K）
    pub shell: u32,
}

impl IonKey {
    pub fn new(z: u32, stage: u32, shell: u32) -> Self {
        IonKey { z, stage, shell }
    }
}

impl fmt::Display for IonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z={} st={} s={}", self.z, self.stage, self.shell)
    }
}

/// Table 2 的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugerRecord {
    pub key: IonKey,
    /// 发射电子的平均总动能 (eV)
    pub electron_energy: f64,
    /// 荧光光子的平均总能量 (eV)
    pub photon_energy: f64,
    /// 荧光产额 ×10000
    pub fluorescence_scaled: f64,
    /// 发射 1..10 个电子的概率 ×10000
    pub probabilities_scaled: [f64; MAX_ELECTRONS],
}

impl AugerRecord {
    /// 发射 n 个电子的概率分布，下标 0 对应 n = 1
    pub fn distribution(&self) -> [f64; MAX_ELECTRONS] {
        let mut dist = [0.0; MAX_ELECTRONS];
        for (p, raw) in dist.iter_mut().zip(self.probabilities_scaled.iter()) {
            *p = raw / TABLE_SCALE;
        }
        dist
    }

    /// 概率总和（受 /10000 舍入影响，应 ≤ 1）
    pub fn total_probability(&self) -> f64 {
        self.distribution().iter().sum()
    }

    /// 平均发射电子数 Σ n·P(n)
    pub fn mean_electrons(&self) -> f64 {
        self.distribution()
            .iter()
            .enumerate()
            .map(|(i, p)| (i + 1) as f64 * p)
            .sum()
    }

    /// 荧光产额（辐射退激概率）
    pub fn fluorescence_yield(&self) -> f64 {
        self.fluorescence_scaled / TABLE_SCALE
    }
}

/// 每个空穴的平均电子/光子数目与能量
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Averages {
    /// 平均 Auger 电子数 N_e
    pub electron_count: f64,
    /// 电子平均能量 E_e (eV)
    pub electron_energy: f64,
    /// 平均光子数 N_p
    pub photon_count: f64,
    /// 光子平均能量 E_p (eV)
    pub photon_energy: f64,
}

impl AddAssign for Averages {
    fn add_assign(&mut self, rhs: Self) {
        self.electron_count += rhs.electron_count;
        self.electron_energy += rhs.electron_energy;
        self.photon_count += rhs.photon_count;
        self.photon_energy += rhs.photon_energy;
    }
}

/// 平均量表 (avg_photons_electrons2) 的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageRecord {
    pub key: IonKey,
    pub averages: Averages,
}

impl From<&AugerRecord> for AverageRecord {
    fn from(record: &AugerRecord) -> Self {
        AverageRecord {
            key: record.key,
            averages: Averages {
                electron_count: record.mean_electrons(),
                electron_energy: record.electron_energy,
                photon_count: record.fluorescence_yield(),
                photon_energy: record.photon_energy,
            },
        }
    }
}
