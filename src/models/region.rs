//! # 地理边界
//!
//! 目标区域的经纬度包围盒（闭区间）。
//!
//! ## 依赖关系
//! - 被 `dataset/clean.rs` 使用

/// 经纬度包围盒，上下界均包含
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

/// 上海 GPS 有效范围
pub const SHANGHAI: BoundingBox = BoundingBox {
    lon_min: 120.0,
    lon_max: 122.0,
    lat_min: 30.0,
    lat_max: 32.0,
};

impl BoundingBox {
    /// 经度是否在范围内
    pub fn contains_lon(&self, lon: f64) -> bool {
        lon >= self.lon_min && lon <= self.lon_max
    }

    /// 纬度是否在范围内
    pub fn contains_lat(&self, lat: f64) -> bool {
        lat >= self.lat_min && lat <= self.lat_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_bounds() {
        assert!(SHANGHAI.contains_lon(120.0));
        assert!(SHANGHAI.contains_lon(122.0));
        assert!(SHANGHAI.contains_lat(30.0));
        assert!(SHANGHAI.contains_lat(32.0));
        assert!(!SHANGHAI.contains_lon(119.999999));
        assert!(!SHANGHAI.contains_lat(32.000001));
    }

    #[test]
    fn test_nan_is_outside() {
        assert!(!SHANGHAI.contains_lon(f64::NAN));
        assert!(!SHANGHAI.contains_lat(f64::NAN));
    }
}
