use std::io::Write;
use std::iter;

use tracing::{debug, info_span};

use super::TourError;
use crate::collections::contiguous::{Array, Vector};

/// Sequences: fixed arrays, owned heap arrays, vectors and using a vector as a stack.
pub fn arrays(out: &mut impl Write) -> Result<(), TourError> {
    let _span = info_span!("arrays").entered();

    // The length of a fixed array is part of its type, so it has to be known at compile time.
    // Indexing is bounds checked: writing past the end panics rather than overwriting whatever
    // happens to live next to the array.
    let mut my_nums = [0_i32; 10];
    my_nums[0] = 5;
    writeln!(out, "Fixed array: {my_nums:?}")?;

    let past_end = my_nums.len();
    if my_nums.get(past_end).is_none() {
        writeln!(
            out,
            "Index {past_end} is out of bounds for a fixed array of {} elements.",
            my_nums.len()
        )?;
    }

    // An Array's size is chosen at runtime. It owns its allocation and frees it when dropped, on
    // every path out of this function. It can't be copied implicitly, only moved or cloned.
    let array_size = 10;
    let mut num_array: Array<i32> = Array::repeat_default(array_size);
    *num_array.try_get_mut(0)? = 5;
    writeln!(out, "Owned array: {num_array}")?;

    if let Err(err) = num_array.try_replace(array_size, 777) {
        writeln!(out, "Rejected write: {err}")?;
    }

    // A Vector is the default choice for a sequence: it can grow, shrink and be resized.
    let mut nums_vector = Vector::from(num_array);
    nums_vector.push(777);
    let popped = nums_vector.pop();
    debug!(?popped, cap = nums_vector.cap(), "pushed and popped");
    writeln!(out, "Vector after push and pop: {nums_vector}")?;

    nums_vector.resize(3, 0);
    writeln!(out, "Vector resized to 3: {nums_vector}")?;

    // No separate stack type is needed, push and pop already work at the end of a Vector.
    let mut stack: Vector<i32> = [1, 2, 3].into_iter().collect();
    let pops = iter::from_fn(|| stack.pop())
        .map(|n| n.to_string())
        .collect::<Vector<String>>();
    writeln!(out, "Stack pops: {}", pops.join(", "))?;

    Ok(())
}
