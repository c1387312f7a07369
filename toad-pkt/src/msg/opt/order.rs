use super::Opt;

/// Stably sort options by ascending number.
///
/// Options sharing a number keep their relative order,
/// which matters for repeatable options like `Uri-Path`
/// where the order of values is meaningful.
///
/// This is an insertion sort; option lists are bounded by
/// [`super::MAX_OPTS`] and usually already sorted, and it needs
/// no allocation.
///
/// ```
/// use toad_pkt::{order, Opt, OptNumber, OptValue};
///
/// let opt = |n: u32, v: &'static [u8]| Opt { number: OptNumber(n),
///                                            value: OptValue(v) };
///
/// let mut opts = [opt(11, b"b"), opt(1, b""), opt(11, b"a")];
/// order::sort(&mut opts);
///
/// assert_eq!(opts, [opt(1, b""), opt(11, b"b"), opt(11, b"a")]);
/// ```
pub fn sort(opts: &mut [Opt<'_>]) {
  (1..opts.len()).for_each(|i| {
                   let mut j = i;
                   while j > 0 && opts[j - 1].number > opts[j].number {
                     opts.swap(j - 1, j);
                     j -= 1;
                   }
                 });
}
