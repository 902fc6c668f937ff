use std::io::Write;

use tracing::info_span;

use super::TourError;

/// Things that group values without being collections: arrays, pairs and tuples.
pub fn not_arrays(out: &mut impl Write) -> Result<(), TourError> {
    let _span = info_span!("not_arrays").entered();

    // Fixed arrays are ordinary values, the same in every context.
    let mut ints = [0_i32; 10];
    ints[0] = 5;
    writeln!(out, "Fixed array: {ints:?}")?;

    // A pair is just a tuple with two elements.
    let my_pair = (String::from("Bill"), 38);
    writeln!(out, "Pair: ({}, {})", my_pair.0, my_pair.1)?;

    // Tuples can hold any fixed number of values. Their fields are accessed by position.
    let person: (String, u32, f64) = (String::from("Bill"), 38, 6.5);
    writeln!(out, "{} is {} years old and {:.1} feet tall", person.0, person.1, person.2)?;

    // Functions can return several values as a tuple, which can be destructured straight into
    // local variables.
    let get_person = || (String::from("Sam"), 14, 5.2);
    let (name, age, height) = get_person();
    writeln!(out, "Also {name} is {age} years old and {height:.1} feet tall")?;

    Ok(())
}
