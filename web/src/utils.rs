/// Seeds the game RNGs from JavaScript's `Math.random`.
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let bytes = std::array::from_fn(|_| (256.0 * random()) as u8);
    u64::from_be_bytes(bytes)
}
