use pair_partition::{Engine, PairCounter};

fn connect(e: &mut Engine, h: usize, d: usize) {
    let stat = e.connect(h, d).expect("items are in range");
    println!("Connecting primary of {h} with secondary of {d}: {stat} co-resident pairs");
}

fn main() {
    let mut e = Engine::new(3).expect("positive item count");
    println!("Created 3 items, every marker on its own");
    connect(&mut e, 1, 2);
    connect(&mut e, 1, 3);
    connect(&mut e, 3, 1);
    println!("{e:?}");
}
