use std::time::{Duration, SystemTime};

pub fn time<T, F: Fn() -> T>(f: F) -> (Duration, T) {
    let start = SystemTime::now();
    let t = f();
    let end = SystemTime::now();
    (end.duration_since(start).unwrap(), t)
}

pub fn print_time<T, F: Fn() -> T>(f: F) -> T {
    let (d, t) = time(f);
    println!("Time elapsed: {d:?}");
    t
}
