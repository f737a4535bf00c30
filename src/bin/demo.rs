use std::error::Error;
use std::ops::RangeInclusive;

use clap::Parser;
use log::{debug, info, LevelFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simple_logger::SimpleLogger;

use rebalance_bst::{Node, Tree, Visitor};

/// Builds a tree from random keys, unbalances it with more random inserts, rebalances it, and
/// prints it at each step.
#[derive(Debug, Parser)]
#[clap(version, author = "mark")]
struct Opts {
    /// One more than this many keys in 1..=100 seed the tree
    #[clap(short = 'n', long, default_value = "20")]
    size: usize,

    /// How many keys in 100..=1000 to insert afterwards
    #[clap(short = 'i', long, default_value = "50")]
    inserts: usize,

    /// Seed for the random keys. Runs with the same seed print the same trees
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// Log level: off, error, warn, info, debug, or trace
    #[clap(short = 'l', long, default_value = "info")]
    log_level: LevelFilter,
}

type Order = fn(&Tree<u32>, Option<Visitor<'_, u32>>) -> rebalance_bst::Result<()>;

fn random_keys(rng: &mut StdRng, count: usize, range: RangeInclusive<u32>) -> Vec<u32> {
    (0..count).map(|_| rng.gen_range(range.clone())).collect()
}

fn report(tree: &Tree<u32>) {
    print!("{}", tree);
    info!("Checking balance: {}", tree.is_balanced());
}

fn visit_all(tree: &Tree<u32>, order: Order) -> rebalance_bst::Result<String> {
    let mut keys = Vec::new();
    order(tree, Some(&mut |node: &Node<u32>| keys.push(node.key().to_string())))?;
    Ok(keys.join(" "))
}

fn main() -> Result<(), Box<dyn Error>> {
    let opts = Opts::parse();
    SimpleLogger::new().with_level(opts.log_level).init()?;
    debug!("{:?}", opts);

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let keys = random_keys(&mut rng, opts.size + 1, 1..=100);
    info!("Building tree from {} random keys", keys.len());
    let mut tree = Tree::from_keys(keys);
    report(&tree);

    info!("Inserting {} more keys", opts.inserts);
    for key in random_keys(&mut rng, opts.inserts, 100..=1000) {
        tree.insert(key);
    }
    report(&tree);

    info!("Rebalancing tree");
    tree.rebalance();
    report(&tree);

    let orders: [(&str, Order); 4] = [
        ("Level order", Tree::level_order_recursive_for_each),
        ("Pre order", Tree::pre_order_for_each),
        ("In order", Tree::in_order_for_each),
        ("Post order", Tree::post_order_for_each),
    ];
    for (name, order) in orders {
        println!("{}: {}", name, visit_all(&tree, order)?);
    }

    Ok(())
}
