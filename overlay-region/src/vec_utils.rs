//--------------------------------------------------------------------
// vec_utils.rs
//--------------------------------------------------------------------
// Utility functions for vectors
//--------------------------------------------------------------------

use arrayvec::*;
use crate::geometry::Coord;

pub fn arrayvec_dedup_by<A: Array>(v: &mut ArrayVec<A>, f: impl Fn(&A::Item, &A::Item) -> bool)
    where A::Item: Copy + PartialEq {
    if v.len() < 2 { return; }
    let mut j = 0;
    for i in 0..v.len()-1 {
        if !f(&v[i], &v[i+1]) {
            v[j] = v[i];
            j += 1;
        }
    }
    v[j] = v[v.len()-1];
    v.truncate(j+1);
}

pub fn arrayvec_dedup<A: Array>(v: &mut ArrayVec<A>)
    where A::Item: Copy + PartialEq {
    arrayvec_dedup_by(v, |&a, &b| a == b);
}

// Curve parameters are finite by the time they get here, so total_cmp agrees with partial_cmp
pub fn sort_params<A: Array<Item = Coord>>(v: &mut ArrayVec<A>) {
    v.sort_unstable_by(|a, b| a.total_cmp(b));
}
