use itertools::Itertools;
use rotate::Algorithm;

pub fn list() {
    let table = Algorithm::ALL
        .iter()
        .map(|algorithm| {
            let heap = if algorithm.uses_heap() { "heap" } else { "" };
            format!("{:<16} {:<24} {}", algorithm.id(), algorithm.name(), heap)
        })
        .join("\n");

    println!("{table}");
}
