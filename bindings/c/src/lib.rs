//! Flat C ABI over the pairing wrapper.
//!
//! Elements cross the boundary as fixed-layout blobs that are
//! pointer-cast to the engine types (the layout equivalence is asserted in
//! the test module). Every fallible entry point reports failure through
//! its return value: string/serialization functions return the written
//! size or 0, everything else 0 on success and a negative code on error.
//! Output pointers may alias input pointers; every operation reads its
//! inputs before writing.

use bnpair::trait_defs::*;
use bnpair::{hash, lagrange, pairing, Fr, Gt, G1, G2};
use ffi_interface as ffi;
use libc::c_int;

/// Identifier of the compiled curve.
pub const BNP_CURVE_SNARK1: c_int = 0;

/// 64-bit units per base-field element, fixed at compile time.
pub const BNP_UNIT_SIZE: c_int = 4;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct BnpFr {
    d: [u64; 4],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct BnpG1 {
    x: [u64; 4],
    y: [u64; 4],
    z: [u64; 4],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct BnpG2 {
    x: [u64; 8],
    y: [u64; 8],
    z: [u64; 8],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct BnpGt {
    d: [u64; 48],
}

/// Opaque handle carrying precomputed Miller-loop coefficients for a fixed
/// G2 point. Created by `bnp_g2_prepare_new`, released by
/// `bnp_g2_prepare_free`.
pub struct BnpG2Prepared(pairing::G2Prepared);

fn fr<'a>(p: *const BnpFr) -> &'a Fr {
    unsafe { &*p.cast() }
}

fn fr_mut<'a>(p: *mut BnpFr) -> &'a mut Fr {
    unsafe { &mut *p.cast() }
}

fn g1<'a>(p: *const BnpG1) -> &'a G1 {
    unsafe { &*p.cast() }
}

fn g1_mut<'a>(p: *mut BnpG1) -> &'a mut G1 {
    unsafe { &mut *p.cast() }
}

fn g2<'a>(p: *const BnpG2) -> &'a G2 {
    unsafe { &*p.cast() }
}

fn g2_mut<'a>(p: *mut BnpG2) -> &'a mut G2 {
    unsafe { &mut *p.cast() }
}

fn gt<'a>(p: *const BnpGt) -> &'a Gt {
    unsafe { &*p.cast() }
}

fn gt_mut<'a>(p: *mut BnpGt) -> &'a mut Gt {
    unsafe { &mut *p.cast() }
}

fn in_bytes<'a>(buf: *const u8, len: usize) -> &'a [u8] {
    unsafe { std::slice::from_raw_parts(buf, len) }
}

fn out_bytes<'a>(buf: *mut u8, len: usize) -> &'a mut [u8] {
    unsafe { std::slice::from_raw_parts_mut(buf, len) }
}

////////////////////////////////////////////////
// initialization and curve metadata

/// Validates that the caller was compiled against this curve and unit
/// width. The engine itself needs no process-global setup.
#[no_mangle]
pub extern "C" fn bnp_init(curve: c_int, max_unit_size: c_int) -> c_int {
    if max_unit_size != BNP_UNIT_SIZE {
        return -10;
    }
    if curve != BNP_CURVE_SNARK1 {
        return -1;
    }
    0
}

#[no_mangle]
pub extern "C" fn bnp_get_op_unit_size() -> c_int {
    ffi::op_unit_size() as c_int
}

#[no_mangle]
pub extern "C" fn bnp_get_g1_byte_size() -> c_int {
    ffi::g1_byte_size() as c_int
}

#[no_mangle]
pub extern "C" fn bnp_get_fr_byte_size() -> c_int {
    ffi::fr_byte_size() as c_int
}

#[no_mangle]
pub extern "C" fn bnp_get_curve_order(buf: *mut u8, max_buf_size: usize) -> usize {
    if buf.is_null() {
        return 0;
    }
    ffi::curve_order(out_bytes(buf, max_buf_size)).unwrap_or(0)
}

#[no_mangle]
pub extern "C" fn bnp_get_field_order(buf: *mut u8, max_buf_size: usize) -> usize {
    if buf.is_null() {
        return 0;
    }
    ffi::field_order(out_bytes(buf, max_buf_size)).unwrap_or(0)
}

////////////////////////////////////////////////
// Fr

#[no_mangle]
pub extern "C" fn bnp_fr_clear(x: *mut BnpFr) {
    if x.is_null() {
        return;
    }
    *fr_mut(x) = Fr::zero();
}

#[no_mangle]
pub extern "C" fn bnp_fr_set_int(y: *mut BnpFr, x: i64) {
    if y.is_null() {
        return;
    }
    *fr_mut(y) = Fr::from(x);
}

#[no_mangle]
pub extern "C" fn bnp_fr_set_int32(y: *mut BnpFr, x: i32) {
    if y.is_null() {
        return;
    }
    *fr_mut(y) = Fr::from(x);
}

#[no_mangle]
pub extern "C" fn bnp_fr_set_str(
    x: *mut BnpFr,
    buf: *const u8,
    buf_size: usize,
    io_mode: c_int,
) -> c_int {
    if x.is_null() || buf.is_null() {
        return -1;
    }
    match ffi::fr_set_str(in_bytes(buf, buf_size), io_mode) {
        Ok(v) => {
            *fr_mut(x) = v;
            0
        }
        Err(_) => -1,
    }
}

#[no_mangle]
pub extern "C" fn bnp_fr_get_str(
    buf: *mut u8,
    max_buf_size: usize,
    x: *const BnpFr,
    io_mode: c_int,
) -> usize {
    if buf.is_null() || x.is_null() {
        return 0;
    }
    ffi::fr_get_str(out_bytes(buf, max_buf_size), fr(x), io_mode).unwrap_or(0)
}

#[no_mangle]
pub extern "C" fn bnp_fr_set_little_endian(
    x: *mut BnpFr,
    buf: *const u8,
    buf_size: usize,
) -> c_int {
    if x.is_null() || buf.is_null() {
        return -1;
    }
    *fr_mut(x) = Fr::from_le_bytes_mod_order(in_bytes(buf, buf_size));
    0
}

#[no_mangle]
pub extern "C" fn bnp_fr_serialize(buf: *mut u8, max_buf_size: usize, x: *const BnpFr) -> usize {
    if buf.is_null() || x.is_null() {
        return 0;
    }
    ffi::serialize(out_bytes(buf, max_buf_size), fr(x)).unwrap_or(0)
}

#[no_mangle]
pub extern "C" fn bnp_fr_deserialize(x: *mut BnpFr, buf: *const u8, buf_size: usize) -> usize {
    if x.is_null() || buf.is_null() {
        return 0;
    }
    match ffi::deserialize::<Fr>(in_bytes(buf, buf_size)) {
        Ok((v, read)) => {
            *fr_mut(x) = v;
            read
        }
        Err(_) => 0,
    }
}

#[no_mangle]
pub extern "C" fn bnp_fr_set_by_csprng(x: *mut BnpFr) -> c_int {
    if x.is_null() {
        return -1;
    }
    *fr_mut(x) = bnpair::rand_fr();
    0
}

#[no_mangle]
pub extern "C" fn bnp_fr_set_hash_of(x: *mut BnpFr, buf: *const u8, buf_size: usize) -> c_int {
    if x.is_null() || buf.is_null() {
        return -1;
    }
    *fr_mut(x) = hash::hash_to_fr(in_bytes(buf, buf_size));
    0
}

#[no_mangle]
pub extern "C" fn bnp_fr_is_valid(x: *const BnpFr) -> c_int {
    if x.is_null() {
        return 0;
    }
    bnpair::fr_in_range(fr(x)) as c_int
}

#[no_mangle]
pub extern "C" fn bnp_fr_is_equal(x: *const BnpFr, y: *const BnpFr) -> c_int {
    if x.is_null() || y.is_null() {
        return 0;
    }
    (fr(x) == fr(y)) as c_int
}

#[no_mangle]
pub extern "C" fn bnp_fr_is_zero(x: *const BnpFr) -> c_int {
    if x.is_null() {
        return 0;
    }
    fr(x).is_zero() as c_int
}

#[no_mangle]
pub extern "C" fn bnp_fr_is_one(x: *const BnpFr) -> c_int {
    if x.is_null() {
        return 0;
    }
    fr(x).is_one() as c_int
}

#[no_mangle]
pub extern "C" fn bnp_fr_neg(y: *mut BnpFr, x: *const BnpFr) {
    if y.is_null() || x.is_null() {
        return;
    }
    let v = -*fr(x);
    *fr_mut(y) = v;
}

#[no_mangle]
pub extern "C" fn bnp_fr_inv(y: *mut BnpFr, x: *const BnpFr) {
    if y.is_null() || x.is_null() {
        return;
    }
    // inverse of zero is pinned to zero, as in the original surface
    let v = fr(x).inverse().unwrap_or_default();
    *fr_mut(y) = v;
}

#[no_mangle]
pub extern "C" fn bnp_fr_sqr(y: *mut BnpFr, x: *const BnpFr) {
    if y.is_null() || x.is_null() {
        return;
    }
    let v = fr(x).square();
    *fr_mut(y) = v;
}

#[no_mangle]
pub extern "C" fn bnp_fr_add(z: *mut BnpFr, x: *const BnpFr, y: *const BnpFr) {
    if z.is_null() || x.is_null() || y.is_null() {
        return;
    }
    let v = *fr(x) + *fr(y);
    *fr_mut(z) = v;
}

#[no_mangle]
pub extern "C" fn bnp_fr_sub(z: *mut BnpFr, x: *const BnpFr, y: *const BnpFr) {
    if z.is_null() || x.is_null() || y.is_null() {
        return;
    }
    let v = *fr(x) - *fr(y);
    *fr_mut(z) = v;
}

#[no_mangle]
pub extern "C" fn bnp_fr_mul(z: *mut BnpFr, x: *const BnpFr, y: *const BnpFr) {
    if z.is_null() || x.is_null() || y.is_null() {
        return;
    }
    let v = *fr(x) * *fr(y);
    *fr_mut(z) = v;
}

#[no_mangle]
pub extern "C" fn bnp_fr_div(z: *mut BnpFr, x: *const BnpFr, y: *const BnpFr) {
    if z.is_null() || x.is_null() || y.is_null() {
        return;
    }
    let v = *fr(x) * fr(y).inverse().unwrap_or_default();
    *fr_mut(z) = v;
}

////////////////////////////////////////////////
// G1

#[no_mangle]
pub extern "C" fn bnp_g1_clear(x: *mut BnpG1) {
    if x.is_null() {
        return;
    }
    *g1_mut(x) = G1::zero();
}

#[no_mangle]
pub extern "C" fn bnp_g1_set_str(
    x: *mut BnpG1,
    buf: *const u8,
    buf_size: usize,
    io_mode: c_int,
) -> c_int {
    if x.is_null() || buf.is_null() {
        return -1;
    }
    match ffi::g1_set_str(in_bytes(buf, buf_size), io_mode) {
        Ok(p) => {
            *g1_mut(x) = p;
            0
        }
        Err(_) => -1,
    }
}

#[no_mangle]
pub extern "C" fn bnp_g1_get_str(
    buf: *mut u8,
    max_buf_size: usize,
    x: *const BnpG1,
    io_mode: c_int,
) -> usize {
    if buf.is_null() || x.is_null() {
        return 0;
    }
    ffi::g1_get_str(out_bytes(buf, max_buf_size), g1(x), io_mode).unwrap_or(0)
}

#[no_mangle]
pub extern "C" fn bnp_g1_serialize(buf: *mut u8, max_buf_size: usize, x: *const BnpG1) -> usize {
    if buf.is_null() || x.is_null() {
        return 0;
    }
    ffi::serialize(out_bytes(buf, max_buf_size), g1(x)).unwrap_or(0)
}

#[no_mangle]
pub extern "C" fn bnp_g1_deserialize(x: *mut BnpG1, buf: *const u8, buf_size: usize) -> usize {
    if x.is_null() || buf.is_null() {
        return 0;
    }
    match ffi::deserialize::<G1>(in_bytes(buf, buf_size)) {
        Ok((p, read)) => {
            *g1_mut(x) = p;
            read
        }
        Err(_) => 0,
    }
}

#[no_mangle]
pub extern "C" fn bnp_g1_is_valid(x: *const BnpG1) -> c_int {
    if x.is_null() {
        return 0;
    }
    let affine = g1(x).into_affine();
    (affine.is_on_curve() && affine.is_in_correct_subgroup_assuming_on_curve()) as c_int
}

#[no_mangle]
pub extern "C" fn bnp_g1_is_equal(x: *const BnpG1, y: *const BnpG1) -> c_int {
    if x.is_null() || y.is_null() {
        return 0;
    }
    (g1(x) == g1(y)) as c_int
}

#[no_mangle]
pub extern "C" fn bnp_g1_is_zero(x: *const BnpG1) -> c_int {
    if x.is_null() {
        return 0;
    }
    g1(x).is_zero() as c_int
}

#[no_mangle]
pub extern "C" fn bnp_g1_hash_and_map_to(x: *mut BnpG1, buf: *const u8, buf_size: usize) -> c_int {
    if x.is_null() || buf.is_null() {
        return -1;
    }
    *g1_mut(x) = hash::hash_to_g1(in_bytes(buf, buf_size));
    0
}

#[no_mangle]
pub extern "C" fn bnp_g1_neg(y: *mut BnpG1, x: *const BnpG1) {
    if y.is_null() || x.is_null() {
        return;
    }
    let p = -*g1(x);
    *g1_mut(y) = p;
}

#[no_mangle]
pub extern "C" fn bnp_g1_dbl(y: *mut BnpG1, x: *const BnpG1) {
    if y.is_null() || x.is_null() {
        return;
    }
    let p = g1(x).double();
    *g1_mut(y) = p;
}

#[no_mangle]
pub extern "C" fn bnp_g1_normalize(y: *mut BnpG1, x: *const BnpG1) {
    if y.is_null() || x.is_null() {
        return;
    }
    let p = G1::from(g1(x).into_affine());
    *g1_mut(y) = p;
}

#[no_mangle]
pub extern "C" fn bnp_g1_add(z: *mut BnpG1, x: *const BnpG1, y: *const BnpG1) {
    if z.is_null() || x.is_null() || y.is_null() {
        return;
    }
    let p = *g1(x) + *g1(y);
    *g1_mut(z) = p;
}

#[no_mangle]
pub extern "C" fn bnp_g1_sub(z: *mut BnpG1, x: *const BnpG1, y: *const BnpG1) {
    if z.is_null() || x.is_null() || y.is_null() {
        return;
    }
    let p = *g1(x) - *g1(y);
    *g1_mut(z) = p;
}

#[no_mangle]
pub extern "C" fn bnp_g1_mul(z: *mut BnpG1, x: *const BnpG1, y: *const BnpFr) {
    if z.is_null() || x.is_null() || y.is_null() {
        return;
    }
    let p = *g1(x) * *fr(y);
    *g1_mut(z) = p;
}

////////////////////////////////////////////////
// G2

#[no_mangle]
pub extern "C" fn bnp_g2_clear(x: *mut BnpG2) {
    if x.is_null() {
        return;
    }
    *g2_mut(x) = G2::zero();
}

#[no_mangle]
pub extern "C" fn bnp_g2_set_str(
    x: *mut BnpG2,
    buf: *const u8,
    buf_size: usize,
    io_mode: c_int,
) -> c_int {
    if x.is_null() || buf.is_null() {
        return -1;
    }
    match ffi::g2_set_str(in_bytes(buf, buf_size), io_mode) {
        Ok(p) => {
            *g2_mut(x) = p;
            0
        }
        Err(_) => -1,
    }
}

#[no_mangle]
pub extern "C" fn bnp_g2_get_str(
    buf: *mut u8,
    max_buf_size: usize,
    x: *const BnpG2,
    io_mode: c_int,
) -> usize {
    if buf.is_null() || x.is_null() {
        return 0;
    }
    ffi::g2_get_str(out_bytes(buf, max_buf_size), g2(x), io_mode).unwrap_or(0)
}

#[no_mangle]
pub extern "C" fn bnp_g2_serialize(buf: *mut u8, max_buf_size: usize, x: *const BnpG2) -> usize {
    if buf.is_null() || x.is_null() {
        return 0;
    }
    ffi::serialize(out_bytes(buf, max_buf_size), g2(x)).unwrap_or(0)
}

#[no_mangle]
pub extern "C" fn bnp_g2_deserialize(x: *mut BnpG2, buf: *const u8, buf_size: usize) -> usize {
    if x.is_null() || buf.is_null() {
        return 0;
    }
    match ffi::deserialize::<G2>(in_bytes(buf, buf_size)) {
        Ok((p, read)) => {
            *g2_mut(x) = p;
            read
        }
        Err(_) => 0,
    }
}

#[no_mangle]
pub extern "C" fn bnp_g2_is_valid(x: *const BnpG2) -> c_int {
    if x.is_null() {
        return 0;
    }
    let affine = g2(x).into_affine();
    (affine.is_on_curve() && affine.is_in_correct_subgroup_assuming_on_curve()) as c_int
}

#[no_mangle]
pub extern "C" fn bnp_g2_is_equal(x: *const BnpG2, y: *const BnpG2) -> c_int {
    if x.is_null() || y.is_null() {
        return 0;
    }
    (g2(x) == g2(y)) as c_int
}

#[no_mangle]
pub extern "C" fn bnp_g2_is_zero(x: *const BnpG2) -> c_int {
    if x.is_null() {
        return 0;
    }
    g2(x).is_zero() as c_int
}

#[no_mangle]
pub extern "C" fn bnp_g2_hash_and_map_to(x: *mut BnpG2, buf: *const u8, buf_size: usize) -> c_int {
    if x.is_null() || buf.is_null() {
        return -1;
    }
    *g2_mut(x) = hash::hash_to_g2(in_bytes(buf, buf_size));
    0
}

#[no_mangle]
pub extern "C" fn bnp_g2_neg(y: *mut BnpG2, x: *const BnpG2) {
    if y.is_null() || x.is_null() {
        return;
    }
    let p = -*g2(x);
    *g2_mut(y) = p;
}

#[no_mangle]
pub extern "C" fn bnp_g2_dbl(y: *mut BnpG2, x: *const BnpG2) {
    if y.is_null() || x.is_null() {
        return;
    }
    let p = g2(x).double();
    *g2_mut(y) = p;
}

#[no_mangle]
pub extern "C" fn bnp_g2_normalize(y: *mut BnpG2, x: *const BnpG2) {
    if y.is_null() || x.is_null() {
        return;
    }
    let p = G2::from(g2(x).into_affine());
    *g2_mut(y) = p;
}

#[no_mangle]
pub extern "C" fn bnp_g2_add(z: *mut BnpG2, x: *const BnpG2, y: *const BnpG2) {
    if z.is_null() || x.is_null() || y.is_null() {
        return;
    }
    let p = *g2(x) + *g2(y);
    *g2_mut(z) = p;
}

#[no_mangle]
pub extern "C" fn bnp_g2_sub(z: *mut BnpG2, x: *const BnpG2, y: *const BnpG2) {
    if z.is_null() || x.is_null() || y.is_null() {
        return;
    }
    let p = *g2(x) - *g2(y);
    *g2_mut(z) = p;
}

#[no_mangle]
pub extern "C" fn bnp_g2_mul(z: *mut BnpG2, x: *const BnpG2, y: *const BnpFr) {
    if z.is_null() || x.is_null() || y.is_null() {
        return;
    }
    let p = *g2(x) * *fr(y);
    *g2_mut(z) = p;
}

////////////////////////////////////////////////
// GT

#[no_mangle]
pub extern "C" fn bnp_gt_clear(x: *mut BnpGt) {
    if x.is_null() {
        return;
    }
    *gt_mut(x) = Gt::zero();
}

#[no_mangle]
pub extern "C" fn bnp_gt_set_int(y: *mut BnpGt, x: i64) {
    if y.is_null() {
        return;
    }
    *gt_mut(y) = Gt::from_base_prime_field(bnpair::Fq::from(x));
}

#[no_mangle]
pub extern "C" fn bnp_gt_set_int32(y: *mut BnpGt, x: i32) {
    if y.is_null() {
        return;
    }
    *gt_mut(y) = Gt::from_base_prime_field(bnpair::Fq::from(x));
}

#[no_mangle]
pub extern "C" fn bnp_gt_set_str(
    x: *mut BnpGt,
    buf: *const u8,
    buf_size: usize,
    io_mode: c_int,
) -> c_int {
    if x.is_null() || buf.is_null() {
        return -1;
    }
    match ffi::gt_set_str(in_bytes(buf, buf_size), io_mode) {
        Ok(f) => {
            *gt_mut(x) = f;
            0
        }
        Err(_) => -1,
    }
}

#[no_mangle]
pub extern "C" fn bnp_gt_get_str(
    buf: *mut u8,
    max_buf_size: usize,
    x: *const BnpGt,
    io_mode: c_int,
) -> usize {
    if buf.is_null() || x.is_null() {
        return 0;
    }
    ffi::gt_get_str(out_bytes(buf, max_buf_size), gt(x), io_mode).unwrap_or(0)
}

#[no_mangle]
pub extern "C" fn bnp_gt_serialize(buf: *mut u8, max_buf_size: usize, x: *const BnpGt) -> usize {
    if buf.is_null() || x.is_null() {
        return 0;
    }
    ffi::serialize(out_bytes(buf, max_buf_size), gt(x)).unwrap_or(0)
}

#[no_mangle]
pub extern "C" fn bnp_gt_deserialize(x: *mut BnpGt, buf: *const u8, buf_size: usize) -> usize {
    if x.is_null() || buf.is_null() {
        return 0;
    }
    match ffi::deserialize::<Gt>(in_bytes(buf, buf_size)) {
        Ok((f, read)) => {
            *gt_mut(x) = f;
            read
        }
        Err(_) => 0,
    }
}

#[no_mangle]
pub extern "C" fn bnp_gt_is_equal(x: *const BnpGt, y: *const BnpGt) -> c_int {
    if x.is_null() || y.is_null() {
        return 0;
    }
    (gt(x) == gt(y)) as c_int
}

#[no_mangle]
pub extern "C" fn bnp_gt_is_zero(x: *const BnpGt) -> c_int {
    if x.is_null() {
        return 0;
    }
    gt(x).is_zero() as c_int
}

#[no_mangle]
pub extern "C" fn bnp_gt_is_one(x: *const BnpGt) -> c_int {
    if x.is_null() {
        return 0;
    }
    gt(x).is_one() as c_int
}

#[no_mangle]
pub extern "C" fn bnp_gt_neg(y: *mut BnpGt, x: *const BnpGt) {
    if y.is_null() || x.is_null() {
        return;
    }
    let f = -*gt(x);
    *gt_mut(y) = f;
}

#[no_mangle]
pub extern "C" fn bnp_gt_inv(y: *mut BnpGt, x: *const BnpGt) {
    if y.is_null() || x.is_null() {
        return;
    }
    let f = gt(x).inverse().unwrap_or_default();
    *gt_mut(y) = f;
}

#[no_mangle]
pub extern "C" fn bnp_gt_sqr(y: *mut BnpGt, x: *const BnpGt) {
    if y.is_null() || x.is_null() {
        return;
    }
    let f = gt(x).square();
    *gt_mut(y) = f;
}

#[no_mangle]
pub extern "C" fn bnp_gt_add(z: *mut BnpGt, x: *const BnpGt, y: *const BnpGt) {
    if z.is_null() || x.is_null() || y.is_null() {
        return;
    }
    let f = *gt(x) + *gt(y);
    *gt_mut(z) = f;
}

#[no_mangle]
pub extern "C" fn bnp_gt_sub(z: *mut BnpGt, x: *const BnpGt, y: *const BnpGt) {
    if z.is_null() || x.is_null() || y.is_null() {
        return;
    }
    let f = *gt(x) - *gt(y);
    *gt_mut(z) = f;
}

#[no_mangle]
pub extern "C" fn bnp_gt_mul(z: *mut BnpGt, x: *const BnpGt, y: *const BnpGt) {
    if z.is_null() || x.is_null() || y.is_null() {
        return;
    }
    let f = *gt(x) * *gt(y);
    *gt_mut(z) = f;
}

#[no_mangle]
pub extern "C" fn bnp_gt_div(z: *mut BnpGt, x: *const BnpGt, y: *const BnpGt) {
    if z.is_null() || x.is_null() || y.is_null() {
        return;
    }
    let f = *gt(x) * gt(y).inverse().unwrap_or_default();
    *gt_mut(z) = f;
}

#[no_mangle]
pub extern "C" fn bnp_gt_pow(z: *mut BnpGt, x: *const BnpGt, y: *const BnpFr) {
    if z.is_null() || x.is_null() || y.is_null() {
        return;
    }
    let f = gt(x).pow(fr(y).into_bigint());
    *gt_mut(z) = f;
}

////////////////////////////////////////////////
// pairing

#[no_mangle]
pub extern "C" fn bnp_pairing(z: *mut BnpGt, x: *const BnpG1, y: *const BnpG2) {
    if z.is_null() || x.is_null() || y.is_null() {
        return;
    }
    let f = pairing::pairing(g1(x), g2(y));
    *gt_mut(z) = f;
}

#[no_mangle]
pub extern "C" fn bnp_miller_loop(z: *mut BnpGt, x: *const BnpG1, y: *const BnpG2) {
    if z.is_null() || x.is_null() || y.is_null() {
        return;
    }
    let f = pairing::miller_loop(g1(x), g2(y));
    *gt_mut(z) = f;
}

#[no_mangle]
pub extern "C" fn bnp_final_exp(y: *mut BnpGt, x: *const BnpGt) {
    if y.is_null() || x.is_null() {
        return;
    }
    let f = pairing::final_exp(gt(x)).unwrap_or_default();
    *gt_mut(y) = f;
}

#[no_mangle]
pub extern "C" fn bnp_g2_prepare_new(q: *const BnpG2) -> *mut BnpG2Prepared {
    if q.is_null() {
        return std::ptr::null_mut();
    }
    Box::into_raw(Box::new(BnpG2Prepared(pairing::prepare_g2(g2(q)))))
}

#[no_mangle]
pub extern "C" fn bnp_g2_prepare_free(q: *mut BnpG2Prepared) {
    if q.is_null() {
        return;
    }
    unsafe {
        let _ = Box::from_raw(q);
    }
}

#[no_mangle]
pub extern "C" fn bnp_precomputed_miller_loop(
    f: *mut BnpGt,
    p: *const BnpG1,
    q: *const BnpG2Prepared,
) {
    if f.is_null() || p.is_null() || q.is_null() {
        return;
    }
    let prepared = unsafe { &*q };
    let out = pairing::precomputed_miller_loop(g1(p), &prepared.0);
    *gt_mut(f) = out;
}

#[no_mangle]
pub extern "C" fn bnp_precomputed_miller_loop2(
    f: *mut BnpGt,
    p1: *const BnpG1,
    q1: *const BnpG2Prepared,
    p2: *const BnpG1,
    q2: *const BnpG2Prepared,
) {
    if f.is_null() || p1.is_null() || q1.is_null() || p2.is_null() || q2.is_null() {
        return;
    }
    let (q1, q2) = unsafe { (&*q1, &*q2) };
    let out = pairing::precomputed_miller_loop_2(g1(p1), &q1.0, g1(p2), &q2.0);
    *gt_mut(f) = out;
}

////////////////////////////////////////////////
// Lagrange interpolation and polynomial evaluation

fn frs<'a>(p: *const BnpFr, k: usize) -> &'a [Fr] {
    unsafe { std::slice::from_raw_parts(p.cast(), k) }
}

fn g1s<'a>(p: *const BnpG1, k: usize) -> &'a [G1] {
    unsafe { std::slice::from_raw_parts(p.cast(), k) }
}

fn g2s<'a>(p: *const BnpG2, k: usize) -> &'a [G2] {
    unsafe { std::slice::from_raw_parts(p.cast(), k) }
}

#[no_mangle]
pub extern "C" fn bnp_fr_lagrange_interpolation(
    out: *mut BnpFr,
    x_vec: *const BnpFr,
    y_vec: *const BnpFr,
    k: usize,
) -> c_int {
    if out.is_null() || x_vec.is_null() || y_vec.is_null() {
        return -1;
    }
    match lagrange::interpolate(frs(x_vec, k), frs(y_vec, k)) {
        Ok(v) => {
            *fr_mut(out) = v;
            0
        }
        Err(_) => -1,
    }
}

#[no_mangle]
pub extern "C" fn bnp_g1_lagrange_interpolation(
    out: *mut BnpG1,
    x_vec: *const BnpFr,
    y_vec: *const BnpG1,
    k: usize,
) -> c_int {
    if out.is_null() || x_vec.is_null() || y_vec.is_null() {
        return -1;
    }
    match lagrange::interpolate(frs(x_vec, k), g1s(y_vec, k)) {
        Ok(p) => {
            *g1_mut(out) = p;
            0
        }
        Err(_) => -1,
    }
}

#[no_mangle]
pub extern "C" fn bnp_g2_lagrange_interpolation(
    out: *mut BnpG2,
    x_vec: *const BnpFr,
    y_vec: *const BnpG2,
    k: usize,
) -> c_int {
    if out.is_null() || x_vec.is_null() || y_vec.is_null() {
        return -1;
    }
    match lagrange::interpolate(frs(x_vec, k), g2s(y_vec, k)) {
        Ok(p) => {
            *g2_mut(out) = p;
            0
        }
        Err(_) => -1,
    }
}

#[no_mangle]
pub extern "C" fn bnp_fr_evaluate_polynomial(
    out: *mut BnpFr,
    c_vec: *const BnpFr,
    c_size: usize,
    x: *const BnpFr,
) -> c_int {
    if out.is_null() || c_vec.is_null() || x.is_null() {
        return -1;
    }
    match lagrange::evaluate_polynomial(frs(c_vec, c_size), *fr(x)) {
        Ok(v) => {
            *fr_mut(out) = v;
            0
        }
        Err(_) => -1,
    }
}

#[no_mangle]
pub extern "C" fn bnp_g1_evaluate_polynomial(
    out: *mut BnpG1,
    c_vec: *const BnpG1,
    c_size: usize,
    x: *const BnpFr,
) -> c_int {
    if out.is_null() || c_vec.is_null() || x.is_null() {
        return -1;
    }
    match lagrange::evaluate_polynomial(g1s(c_vec, c_size), *fr(x)) {
        Ok(p) => {
            *g1_mut(out) = p;
            0
        }
        Err(_) => -1,
    }
}

#[no_mangle]
pub extern "C" fn bnp_g2_evaluate_polynomial(
    out: *mut BnpG2,
    c_vec: *const BnpG2,
    c_size: usize,
    x: *const BnpFr,
) -> c_int {
    if out.is_null() || c_vec.is_null() || x.is_null() {
        return -1;
    }
    match lagrange::evaluate_polynomial(g2s(c_vec, c_size), *fr(x)) {
        Ok(p) => {
            *g2_mut(out) = p;
            0
        }
        Err(_) => -1,
    }
}
