//! Robust geometric orientation predicates.
//!
//! [`orient2d`] decides whether a point lies to the left of, to the right
//! of, or exactly on the directed line through two other points. Only the
//! **sign** of the returned value is meaningful; the magnitude is an
//! unscaled cross-product-like quantity.
//!
//! The straightforward floating-point determinant ([`orient2d_fast`]) can
//! return the wrong sign when the true value is near zero — catastrophic
//! cancellation swallows the answer. The predicates here recover the exact
//! sign in three tiers:
//!
//! - [`orient2d_fast`]: one rounded determinant; fast, sign unreliable near
//!   degeneracy, never used alone for topological decisions.
//! - [`orient2d_exact`] and [`orient2d_slow`]: full expansion arithmetic
//!   (see [`expansion`]); always the exact sign, at fixed cost. `slow` is a
//!   brute-force reference computed by a different route.
//! - [`orient2d`]: the adaptive tier. Computes the fast determinant along
//!   with a running error bound and escalates through progressively exact
//!   stages only while the bound cannot certify the sign, so typical inputs
//!   pay roughly the fast price and adversarial inputs still get the exact
//!   answer.
//!
//! The error bounds and staging follow Shewchuk's adaptive-precision
//! arithmetic; see "Adaptive Precision Floating-Point Arithmetic and Fast
//! Robust Geometric Predicates".

pub mod expansion;

use expansion::{
    estimate, fast_expansion_sum_zeroelim, scale_expansion_zeroelim, two_diff, two_diff_tail,
    two_product, two_two_diff, EPSILON,
};

/// Relative error bound on the result of the final adaptive stage.
const RESULT_ERRBOUND: f64 = (3.0 + 8.0 * EPSILON) * EPSILON;
/// Certifies the fast determinant (stage A).
const CCW_ERRBOUND_A: f64 = (3.0 + 16.0 * EPSILON) * EPSILON;
/// Certifies the four-component determinant estimate (stage B).
const CCW_ERRBOUND_B: f64 = (2.0 + 12.0 * EPSILON) * EPSILON;
/// Certifies the tail-corrected determinant (stage C).
const CCW_ERRBOUND_C: f64 = (9.0 + 64.0 * EPSILON) * EPSILON * EPSILON;

/// Approximate orientation of `c` relative to the directed line `a` → `b`.
///
/// Positive when the triangle `a`, `b`, `c` winds counter-clockwise,
/// negative when clockwise. Near-collinear inputs may get the wrong sign;
/// use [`orient2d`] when the sign matters.
pub fn orient2d_fast(pa: [f64; 2], pb: [f64; 2], pc: [f64; 2]) -> f64 {
    let acx = pa[0] - pc[0];
    let bcx = pb[0] - pc[0];
    let acy = pa[1] - pc[1];
    let bcy = pb[1] - pc[1];
    acx * bcy - acy * bcx
}

/// Exact-sign orientation via full expansion arithmetic.
///
/// Expands the 2x2 determinant term by term — six exact products combined
/// into one expansion — and returns the expansion's most significant
/// component.
pub fn orient2d_exact(pa: [f64; 2], pb: [f64; 2], pc: [f64; 2]) -> f64 {
    let (axby1, axby0) = two_product(pa[0], pb[1]);
    let (axcy1, axcy0) = two_product(pa[0], pc[1]);
    let aterms = two_two_diff(axby1, axby0, axcy1, axcy0);

    let (bxcy1, bxcy0) = two_product(pb[0], pc[1]);
    let (bxay1, bxay0) = two_product(pb[0], pa[1]);
    let bterms = two_two_diff(bxcy1, bxcy0, bxay1, bxay0);

    let (cxay1, cxay0) = two_product(pc[0], pa[1]);
    let (cxby1, cxby0) = two_product(pc[0], pb[1]);
    let cterms = two_two_diff(cxay1, cxay0, cxby1, cxby0);

    let mut v = [0.0; 8];
    let vlen = fast_expansion_sum_zeroelim(&aterms, &bterms, &mut v);
    let mut w = [0.0; 12];
    let wlen = fast_expansion_sum_zeroelim(&v[..vlen], &cterms, &mut w);
    w[wlen - 1]
}

/// Exact-sign orientation by brute force, as a cross-check on
/// [`orient2d_exact`].
///
/// Takes exact coordinate differences first, then multiplies the resulting
/// two-component expansions out exactly via scaled expansions. Slower and
/// structured differently from [`orient2d_exact`], which is the point: the
/// two must agree everywhere.
pub fn orient2d_slow(pa: [f64; 2], pb: [f64; 2], pc: [f64; 2]) -> f64 {
    let (acx, acxtail) = two_diff(pa[0], pc[0]);
    let (acy, acytail) = two_diff(pa[1], pc[1]);
    let (bcx, bcxtail) = two_diff(pb[0], pc[0]);
    let (bcy, bcytail) = two_diff(pb[1], pc[1]);

    let (left, leftlen) = expansion_product(acx, acxtail, bcy, bcytail);
    let (right, rightlen) = expansion_product(acy, acytail, bcx, bcxtail);

    // Negation of an expansion is exact, component by component.
    let mut negright = [0.0; 8];
    for (n, r) in negright[..rightlen].iter_mut().zip(&right[..rightlen]) {
        *n = -r;
    }

    let mut det = [0.0; 16];
    let detlen = fast_expansion_sum_zeroelim(&left[..leftlen], &negright[..rightlen], &mut det);
    det[detlen - 1]
}

/// Exact product of two two-component expansions `(ahi + alo) * (bhi + blo)`.
fn expansion_product(ahi: f64, alo: f64, bhi: f64, blo: f64) -> ([f64; 8], usize) {
    let a = [alo, ahi];
    let mut scaled_hi = [0.0; 4];
    let hi_len = scale_expansion_zeroelim(&a, bhi, &mut scaled_hi);
    let mut scaled_lo = [0.0; 4];
    let lo_len = scale_expansion_zeroelim(&a, blo, &mut scaled_lo);

    let mut product = [0.0; 8];
    let len =
        fast_expansion_sum_zeroelim(&scaled_hi[..hi_len], &scaled_lo[..lo_len], &mut product);
    (product, len)
}

/// Adaptive exact-sign orientation of `c` relative to the line `a` → `b`.
///
/// Returns the fast determinant whenever its error bound certifies the
/// sign, escalating through Shewchuk's stages B, C and D otherwise. The
/// sign always matches [`orient2d_exact`]; the cost is proportional to how
/// close the input is to degeneracy.
pub fn orient2d(pa: [f64; 2], pb: [f64; 2], pc: [f64; 2]) -> f64 {
    let detleft = (pa[0] - pc[0]) * (pb[1] - pc[1]);
    let detright = (pa[1] - pc[1]) * (pb[0] - pc[0]);
    let det = detleft - detright;

    let detsum = if detleft > 0.0 {
        if detright <= 0.0 {
            return det;
        }
        detleft + detright
    } else if detleft < 0.0 {
        if detright >= 0.0 {
            return det;
        }
        -detleft - detright
    } else {
        return det;
    };

    let errbound = CCW_ERRBOUND_A * detsum;
    if det >= errbound || -det >= errbound {
        return det;
    }

    orient2d_adapt(pa, pb, pc, detsum)
}

/// Stages B-D of the adaptive orientation test. `detsum` is the magnitude
/// sum of the two fast determinant halves, the scale the error bounds are
/// relative to.
fn orient2d_adapt(pa: [f64; 2], pb: [f64; 2], pc: [f64; 2], detsum: f64) -> f64 {
    let acx = pa[0] - pc[0];
    let bcx = pb[0] - pc[0];
    let acy = pa[1] - pc[1];
    let bcy = pb[1] - pc[1];

    // Stage B: the determinant of the rounded differences, exactly.
    let (detleft, detlefttail) = two_product(acx, bcy);
    let (detright, detrighttail) = two_product(acy, bcx);
    let b = two_two_diff(detleft, detlefttail, detright, detrighttail);

    let mut det = estimate(&b);
    let errbound = CCW_ERRBOUND_B * detsum;
    if det >= errbound || -det >= errbound {
        return det;
    }

    // Stage C: correct for the roundoff the coordinate differences lost.
    let acxtail = two_diff_tail(pa[0], pc[0], acx);
    let bcxtail = two_diff_tail(pb[0], pc[0], bcx);
    let acytail = two_diff_tail(pa[1], pc[1], acy);
    let bcytail = two_diff_tail(pb[1], pc[1], bcy);

    if acxtail == 0.0 && acytail == 0.0 && bcxtail == 0.0 && bcytail == 0.0 {
        return det;
    }

    let errbound = CCW_ERRBOUND_C * detsum + RESULT_ERRBOUND * det.abs();
    det += (acx * bcytail + bcy * acxtail) - (acy * bcxtail + bcx * acytail);
    if det >= errbound || -det >= errbound {
        return det;
    }

    // Stage D: the full expansion. Always exact.
    let (s1, s0) = two_product(acxtail, bcy);
    let (t1, t0) = two_product(acytail, bcx);
    let u = two_two_diff(s1, s0, t1, t0);
    let mut c1 = [0.0; 8];
    let c1len = fast_expansion_sum_zeroelim(&b, &u, &mut c1);

    let (s1, s0) = two_product(acx, bcytail);
    let (t1, t0) = two_product(acy, bcxtail);
    let u = two_two_diff(s1, s0, t1, t0);
    let mut c2 = [0.0; 12];
    let c2len = fast_expansion_sum_zeroelim(&c1[..c1len], &u, &mut c2);

    let (s1, s0) = two_product(acxtail, bcytail);
    let (t1, t0) = two_product(acytail, bcxtail);
    let u = two_two_diff(s1, s0, t1, t0);
    let mut d = [0.0; 16];
    let dlen = fast_expansion_sum_zeroelim(&c2[..c2len], &u, &mut d);

    d[dlen - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sign(x: f64) -> i32 {
        if x > 0.0 {
            1
        } else if x < 0.0 {
            -1
        } else {
            0
        }
    }

    /// Run every exact tier in one call order and check they agree on the
    /// value, not just the sign.
    fn orient2d_checked_in_order(pa: [f64; 2], pb: [f64; 2], pc: [f64; 2]) -> f64 {
        let exact = orient2d_exact(pa, pb, pc);
        let slow = orient2d_slow(pa, pb, pc);
        let adapt = orient2d(pa, pb, pc);

        assert_eq!(exact, slow);
        assert_eq!(exact, adapt);

        adapt
    }

    /// Run all three cyclic call orders and check they return identical
    /// values.
    fn orient2d_checked(pa: [f64; 2], pb: [f64; 2], pc: [f64; 2]) -> f64 {
        let res1 = orient2d_checked_in_order(pa, pb, pc);
        let res2 = orient2d_checked_in_order(pb, pc, pa);
        let res3 = orient2d_checked_in_order(pc, pa, pb);

        assert_eq!(res1, res2);
        assert_eq!(res2, res3);

        res1
    }

    #[test]
    fn test_orient2d_simple() {
        let res = orient2d_checked([0.0, 0.0], [1.0, 0.0], [1.0, 1.0]);
        assert_eq!(res, 1.0);
    }

    #[test]
    fn test_orient2d_negative() {
        let res = orient2d_checked([0.0, 0.0], [1.0, 0.0], [1.0, -1.0]);
        assert_eq!(res, -1.0);
    }

    #[test]
    fn test_orient2d_marginal() {
        // Depending on the order of evaluation, the fast routine sometimes
        // finds these in line.
        let res = orient2d_checked([0.0, 0.0], [1.0, 0.0], [1e50, 1e-80]);
        assert!(res > 0.0);
    }

    #[test]
    fn test_orient2d_collinear() {
        assert_eq!(orient2d_checked([0.0, 0.0], [1.0, 1.0], [2.0, 2.0]), 0.0);
        assert_eq!(
            orient2d_checked([0.0, 0.0], [1e100, 1e100], [2e100, 2e100]),
            0.0
        );
        // Repeated points are always collinear.
        assert_eq!(orient2d_checked([3.5, -2.0], [3.5, -2.0], [1.0, 7.0]), 0.0);
    }

    #[test]
    fn test_orient2d_just_off_the_line() {
        // c sits one representable step above the diagonal; some call
        // orders certify this at the fast stage, others have to escalate,
        // and all of them must land on the exact value.
        let res = orient2d_checked([0.0, 0.0], [1.0, 1.0], [0.5, 0.5 + 2f64.powi(-52)]);
        assert_eq!(res, 2f64.powi(-52));
    }

    #[test]
    fn test_orient2d_fast_agrees_when_well_conditioned() {
        let cases = [
            ([0.0, 0.0], [1.0, 0.0], [1.0, 1.0]),
            ([0.0, 0.0], [1.0, 0.0], [1.0, -1.0]),
            ([-3.0, 2.0], [4.0, 1.0], [0.5, 9.0]),
        ];
        for (pa, pb, pc) in cases {
            assert_eq!(
                sign(orient2d_fast(pa, pb, pc)),
                sign(orient2d(pa, pb, pc))
            );
        }
    }

    #[test]
    fn test_orient2d_antisymmetric_sign() {
        let pa = [0.2, 0.9];
        let pb = [1.7, -0.4];
        let pc = [0.3, 0.35];
        assert_eq!(
            sign(orient2d(pa, pb, pc)),
            -sign(orient2d(pb, pa, pc))
        );
    }

    proptest! {
        #[test]
        fn prop_adaptive_matches_exact(
            ax in -1.0..1.0f64, ay in -1.0..1.0f64,
            bx in -1.0..1.0f64, by in -1.0..1.0f64,
            cx in -1.0..1.0f64, cy in -1.0..1.0f64,
        ) {
            let (pa, pb, pc) = ([ax, ay], [bx, by], [cx, cy]);
            prop_assert_eq!(sign(orient2d(pa, pb, pc)), sign(orient2d_exact(pa, pb, pc)));
            prop_assert_eq!(sign(orient2d_slow(pa, pb, pc)), sign(orient2d_exact(pa, pb, pc)));
        }

        #[test]
        fn prop_cyclic_sign_invariance(
            ax in -1.0..1.0f64, ay in -1.0..1.0f64,
            bx in -1.0..1.0f64, by in -1.0..1.0f64,
            // Points constructed on the segment a-b, so roundoff puts them
            // barely off the line: the adversarial regime for the fast tier.
            t in 0.0..1.0f64,
        ) {
            let (pa, pb) = ([ax, ay], [bx, by]);
            let pc = [ax + t * (bx - ax), ay + t * (by - ay)];

            let s1 = sign(orient2d(pa, pb, pc));
            let s2 = sign(orient2d(pb, pc, pa));
            let s3 = sign(orient2d(pc, pa, pb));
            prop_assert_eq!(s1, s2);
            prop_assert_eq!(s2, s3);
            prop_assert_eq!(s1, sign(orient2d_exact(pa, pb, pc)));
        }
    }
}
