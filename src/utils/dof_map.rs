#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Writes `f(input[i])` into `output[i]` for every control point `i`.
///
/// Every entry is computed independently from the others, so the map runs on
/// the rayon thread pool when the `parallel` feature is enabled. The result is
/// the same regardless of the scheduling.
///
/// # Panics
///
/// Panics if `input` and `output` don't have the same length.
pub fn map_dofs<I, O, F>(input: &[I], output: &mut [O], f: F)
where
    I: Sync,
    O: Send,
    F: Fn(&I) -> O + Sync + Send,
{
    assert_eq!(
        input.len(),
        output.len(),
        "input and output dof arrays must have the same length"
    );

    #[cfg(feature = "parallel")]
    output
        .par_iter_mut()
        .zip(input.par_iter())
        .for_each(|(out, inp)| *out = f(inp));

    #[cfg(not(feature = "parallel"))]
    output
        .iter_mut()
        .zip(input.iter())
        .for_each(|(out, inp)| *out = f(inp));
}
