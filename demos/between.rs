extern crate between;
use between::Comparable;


fn main() {
    let (lower, upper) = (1, 10);

    for value in &[1, 2, 9, 10] {
        println!("{:>4} is between {} and {}: {}", value, lower, upper, value.is_between(&lower, &upper));
    }
    println!();

    for value in &[1, 2, 9, 10] {
        println!("{:>4} is in range {} and {}: {}", value, lower, upper, value.is_in_range(&lower, &upper));
    }
    println!();
}
