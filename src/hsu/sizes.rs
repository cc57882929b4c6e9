use std::f64::consts::PI;

use serde::Serialize;

use super::constants::DesignConstants;

/// 펌핑 그룹 치수 산정에 쓰는 설계 비율.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingBalances {
    /// 피스톤 직경 대비 피치원 점유율
    pub k1: f64,
    /// 밸브 플레이트 랜드 폭 비율
    pub k2: f64,
    /// 키드니 포트 면적 / 피스톤 면적
    pub k3: f64,
    /// 슬리퍼 면적 / 피스톤 투영 면적
    pub k4: f64,
    /// 슬리퍼 외경 점유율
    pub k5: f64,
}

impl Default for SizingBalances {
    fn default() -> Self {
        Self {
            k1: 0.75,
            k2: 0.91,
            k3: 0.48,
            k4: 0.93,
            k5: 0.95,
        }
    }
}

/// 축방향 피스톤 기계의 펌핑 그룹 기본 치수(m, m²).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PumpingGroup {
    pub piston_diameter_m: f64,
    pub piston_area_m2: f64,
    /// 피치원 직경
    pub pitch_circle_diameter_m: f64,
    pub stroke_m: f64,
    /// 피스톤 최소 물림 길이
    pub min_engagement_m: f64,
    pub kidney_width_m: f64,
    pub land_width_m: f64,
    /// 외측 실링 랜드 내경/외경
    pub outer_land_inner_radius_m: f64,
    pub outer_land_outer_radius_m: f64,
    /// 내측 실링 랜드 외경/내경
    pub inner_land_outer_radius_m: f64,
    pub inner_land_inner_radius_m: f64,
    pub shoe_inner_radius_m: f64,
    pub shoe_outer_radius_m: f64,
}

impl PumpingGroup {
    /// 배제용적, 사판각, 피스톤 수로부터 치수를 산정한다.
    pub fn from_design(design: &DesignConstants, k: &SizingBalances) -> Self {
        let z = f64::from(design.pistons);
        let tan_swash = design.swash_angle_rad().tan();

        let d = (4.0 * design.displacement_m3() * k.k1 / (z * z * tan_swash)).cbrt();
        let area = PI * d * d / 4.0;
        let pcd = z * d / (PI * k.k1);
        let stroke = pcd * tan_swash;

        let kidney_area = k.k3 * area;
        let kidney_width = 2.0 * ((d * d + (PI - 4.0) * kidney_area).sqrt() - d) / (PI - 4.0);
        let land_width = k.k2 * z * area / (PI * pcd) - kidney_width;

        let outer_in = (pcd + kidney_width) / 2.0;
        let inner_out = (pcd - kidney_width) / 2.0;

        let shoe_area = k.k4 * area / design.swash_angle_rad().cos();
        let shoe_out = PI * pcd * k.k5 / (2.0 * z);
        let shoe_in = (shoe_out * shoe_out - shoe_area / PI).sqrt();

        Self {
            piston_diameter_m: d,
            piston_area_m2: area,
            pitch_circle_diameter_m: pcd,
            stroke_m: stroke,
            min_engagement_m: 1.4 * d,
            kidney_width_m: kidney_width,
            land_width_m: land_width,
            outer_land_inner_radius_m: outer_in,
            outer_land_outer_radius_m: outer_in + land_width,
            inner_land_outer_radius_m: inner_out,
            inner_land_inner_radius_m: inner_out - land_width,
            shoe_inner_radius_m: shoe_in,
            shoe_outer_radius_m: shoe_out,
        }
    }

    /// 고정 설계값과 기본 비율로 산정한 HSU 치수.
    pub fn hsu() -> Self {
        Self::from_design(&DesignConstants::HSU, &SizingBalances::default())
    }

    /// 치수로부터 역산한 기하학적 배제용적(cc/rev).
    pub fn swept_volume_cc(&self, pistons: u32) -> f64 {
        f64::from(pistons) * self.piston_area_m2 * self.stroke_m * 1e6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsu_piston_diameter() {
        let g = PumpingGroup::hsu();
        assert!((g.piston_diameter_m - 0.036878).abs() < 1e-6);
        assert!((g.pitch_circle_diameter_m - 0.140865).abs() < 1e-6);
    }

    #[test]
    fn radii_are_ordered() {
        let g = PumpingGroup::hsu();
        assert!(g.inner_land_inner_radius_m > 0.0);
        assert!(g.inner_land_inner_radius_m < g.inner_land_outer_radius_m);
        assert!(g.inner_land_outer_radius_m < g.outer_land_inner_radius_m);
        assert!(g.outer_land_inner_radius_m < g.outer_land_outer_radius_m);
        assert!(g.shoe_inner_radius_m > 0.0);
        assert!(g.shoe_inner_radius_m < g.shoe_outer_radius_m);
    }

    #[test]
    fn swept_volume_matches_displacement() {
        let g = PumpingGroup::hsu();
        let v = g.swept_volume_cc(DesignConstants::HSU.pistons);
        assert!((v - 440.0).abs() < 1e-6);
    }
}
