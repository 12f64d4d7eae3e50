//! Various unsorted integer and search helpers.

/// Finds the smallest `i` in `min..max` such that `predicate(i)` is `true`.
///
/// The predicate must be monotonic (`false` then `true`) over the range. Returns `max` if
/// the predicate is `false` everywhere.
pub fn binary_search(mut min: i32, max: i32, mut predicate: impl FnMut(i32) -> bool) -> i32 {
    let mut len = max - min;

    while len > 0 {
        let half = len / 2;
        let mid = min + half;

        if predicate(mid) {
            len = half;
        } else {
            min = mid + 1;
            len -= half + 1;
        }
    }

    min
}

/// The greatest common divisor of `a` and `b`.
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// The least common multiple of `a` and `b`.
///
/// Computed in 64 bits since the product of two subdivision counts may overflow.
pub fn lcm(a: u32, b: u32) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a as u64 * (b / gcd(a, b)) as u64
}
