//! Prints a handful of hardcoded example runs: parse both interval
//! lists, subtract the excludes from the includes, format the result.

use interval_complement::direct;
use interval_complement::text;
use interval_complement::Interval;

fn main() {
    run_example(1, "10-100", "20-30");
    run_example(2, "50-5000", "");
    run_example(3, "10-100, 200-300", "95-205");
    run_example(4, "10-100, 200-300, 400-500", "95-205, 410-420");
}

fn run_example(n: u32, includes: &str, excludes: &str) {
    let includes: Vec<Interval<i64>> = text::parse(includes);
    let excludes: Vec<Interval<i64>> = text::parse(excludes);

    let result = direct::complement(&includes, &excludes);

    println!("Example {n}:");
    println!("Includes: {}", text::format(&includes));
    println!("Excludes: {}", text::format(&excludes));
    println!("Result:   {}", text::format(&result));
    println!();
}
