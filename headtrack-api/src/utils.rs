//! Quaternion and vector helpers shared by every camera computation, plus
//! frame timestamps.
//!
//! Quaternions are euclid `Rotation3D`s (`i, j, k` vector part, `r` scalar
//! part). Vector addition and subtraction are euclid's `+` and `-`.

use crate::error::CameraError;
use euclid::{Rotation3D, Vector3D};
use time::OffsetDateTime;

/// How far the norm of an orientation may stray from 1 before it is
/// rejected instead of renormalized.
pub const UNIT_TOLERANCE: f64 = 1e-5;

// Returns the current time in milliseconds
pub fn timestamp() -> f64 {
    OffsetDateTime::now_utc().unix_timestamp_nanos() as f64 * 1e-6
}

/// Fails with `NonUnitOrientation` when `q` is not a unit quaternion
/// within `UNIT_TOLERANCE`.
pub fn ensure_unit<Src, Dst>(q: &Rotation3D<f64, Src, Dst>) -> Result<(), CameraError> {
    let norm = q.square_norm().sqrt();
    if !norm.is_finite() || (norm - 1.0).abs() > UNIT_TOLERANCE {
        debug!("Rejecting orientation with norm {}", norm);
        return Err(CameraError::NonUnitOrientation { norm });
    }
    Ok(())
}

/// Applies the rotation `q` to `v`. `q` is scaled to unit length first, so
/// orientations accepted by `ensure_unit` rotate without stretching.
pub fn rotate<Src, Dst>(v: Vector3D<f64, Src>, q: &Rotation3D<f64, Src, Dst>) -> Vector3D<f64, Dst> {
    let norm = q.square_norm().sqrt();
    let (i, j, k, r) = (q.i / norm, q.j / norm, q.k / norm, q.r / norm);

    // v' = v + r * t + u x t, with u = (i, j, k) and t = 2 u x v
    let tx = 2.0 * (j * v.z - k * v.y);
    let ty = 2.0 * (k * v.x - i * v.z);
    let tz = 2.0 * (i * v.y - j * v.x);
    Vector3D::new(
        v.x + r * tx + (j * tz - k * ty),
        v.y + r * ty + (k * tx - i * tz),
        v.z + r * tz + (i * ty - j * tx),
    )
}

/// Inverse of a unit quaternion, which is its conjugate.
pub fn invert<Src, Dst>(q: &Rotation3D<f64, Src, Dst>) -> Result<Rotation3D<f64, Dst, Src>, CameraError> {
    ensure_unit(q)?;
    Ok(q.inverse().normalize())
}

/// Hamilton product `a * b`: the orientation reached by applying `b` first,
/// then `a`. The result is renormalized so repeated composition does not
/// drift off the unit sphere.
pub fn compose<A, B, C>(a: &Rotation3D<f64, B, C>, b: &Rotation3D<f64, A, B>) -> Rotation3D<f64, A, C> {
    let q = Rotation3D::quaternion(
        a.r * b.i + a.i * b.r + a.j * b.k - a.k * b.j,
        a.r * b.j - a.i * b.k + a.j * b.r + a.k * b.i,
        a.r * b.k + a.i * b.j - a.j * b.i + a.k * b.r,
        a.r * b.r - a.i * b.i - a.j * b.j - a.k * b.k,
    );
    q.normalize()
}
