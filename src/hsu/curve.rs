//! 온도 등 단일 변수에 대한 참조 곡선과 보간 전략.

use super::error::{HsuError, HsuResult};

/// 구간 보간 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    /// y를 선형 보간
    Linear,
    /// ln(y)를 선형 보간. 점도처럼 지수적으로 변하는 값에 사용하며 y > 0 이어야 한다.
    LogLinear,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

impl CurvePoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 불변 (x, y) 표와 보간 전략의 묶음. 표 범위 밖은 외삽하지 않는다.
#[derive(Debug, Clone, Copy)]
pub struct Curve {
    points: &'static [CurvePoint],
    interpolation: Interpolation,
}

impl Curve {
    /// 점이 2개 이상이고 x가 엄격히 증가해야 한다.
    pub fn new(points: &'static [CurvePoint], interpolation: Interpolation) -> HsuResult<Self> {
        if points.len() < 2 {
            return Err(HsuError::InvalidInput {
                what: "curve needs at least two points",
            });
        }
        if points.windows(2).any(|w| w[1].x <= w[0].x) {
            return Err(HsuError::InvalidInput {
                what: "curve x values must be strictly increasing",
            });
        }
        if interpolation == Interpolation::LogLinear && points.iter().any(|p| p.y <= 0.0) {
            return Err(HsuError::InvalidInput {
                what: "log-linear curve needs positive y values",
            });
        }
        Ok(Self {
            points,
            interpolation,
        })
    }

    pub fn x_min(&self) -> f64 {
        self.points[0].x
    }

    pub fn x_max(&self) -> f64 {
        self.points[self.points.len() - 1].x
    }

    pub fn points(&self) -> &'static [CurvePoint] {
        self.points
    }

    /// x에서의 값을 보간한다. 범위 밖이거나 NaN이면 `None`.
    pub fn at(&self, x: f64) -> Option<f64> {
        if !(x >= self.x_min() && x <= self.x_max()) {
            return None;
        }
        for win in self.points.windows(2) {
            let (a, b) = (win[0], win[1]);
            if x >= a.x && x <= b.x {
                if x == a.x {
                    return Some(a.y);
                }
                if x == b.x {
                    return Some(b.y);
                }
                let frac = (x - a.x) / (b.x - a.x);
                let y = match self.interpolation {
                    Interpolation::Linear => a.y + frac * (b.y - a.y),
                    Interpolation::LogLinear => (a.y.ln() + frac * (b.y.ln() - a.y.ln())).exp(),
                };
                return Some(y);
            }
        }
        None
    }
}
