/// A conditional-expression macro.  Rust's `if` is already an
/// expression, but `cargo fmt` insists on spreading it across four
/// lines, and the table of border-clamping rules in the seam solver
/// reads much better when each rule fits on one line.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
