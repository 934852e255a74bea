use optionals::{of, Optional};

fn divide(numerator: f64, denominator: f64) -> Optional<f64> {
    of((denominator != 0.0).then(|| numerator / denominator))
}

fn main() {
    // Only doubles when the division produced a value.
    let result = divide(10.0, 2.0).map(|value| value * 2.0).unwrap_or(0.0);
    println!("{result}");

    let result = divide(10.0, 0.0).map(|value| value * 2.0).unwrap_or(0.0);
    println!("{result}");

    println!("{}", divide(1.0, 4.0));
    println!("{}", divide(1.0, 0.0));
}
