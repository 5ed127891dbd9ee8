#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::indexing_slicing)]

use std::error::Error;

use chainmap::{ChainedHashMap, HashFn, find_mode, hash_function_1, hash_function_2};
use log::info;
use plotters::prelude::*;
use rand::Rng;

const NUM_KEYS: usize = 5_000;
const SAMPLE_EVERY: usize = 100;
const INITIAL_CAPACITY: usize = 53;
const KEY_SPACE: u32 = 1_000_000;

// Hash strategies to compare
const STRATEGIES: [(&str, HashFn); 2] =
    [("hash_function_1", hash_function_1), ("hash_function_2", hash_function_2)];

const MODE_CASES: [&[&str]; 4] = [
    &["apple", "apple", "grape", "melon", "peach"],
    &["Arch", "Manjaro", "Manjaro", "Mint", "Mint", "Mint", "Ubuntu", "Ubuntu", "Ubuntu"],
    &["one", "two", "three", "four", "five"],
    &["2", "4", "2", "6", "8", "4", "1", "3", "4", "5", "7", "3", "3", "2"],
];

const FONT_FAMILY: &str = "sans-serif";
const COLORS: [RGBColor; 2] = [
    RGBColor(220, 50, 50), // Bright red
    RGBColor(50, 90, 220), // Bright blue
];
const LINE_WIDTH: u32 = 2;
const TEXT_SIZE: i32 = 16;
const TITLE_SIZE: i32 = 35;

/// Table statistics after a number of `put` calls
#[derive(Debug, Clone, Copy)]
struct Sample {
    inserted: usize,
    len: usize,
    capacity: usize,
    empty_buckets: usize,
    load: f64,
    longest_chain: usize,
}

type Series = Vec<(&'static str, Vec<(usize, f64)>)>;

// Inserts every key into a fresh map and samples its shape along the way
fn sample_growth(hasher: HashFn, keys: &[String]) -> Vec<Sample> {
    let mut map = ChainedHashMap::with_capacity_and_hasher(INITIAL_CAPACITY, hasher);
    let mut samples = Vec::with_capacity(keys.len() / SAMPLE_EVERY);

    for (index, key) in keys.iter().enumerate() {
        map.put(key.as_str(), index);

        let inserted = index + 1;
        if inserted % SAMPLE_EVERY == 0 {
            samples.push(Sample {
                inserted,
                len: map.len(),
                capacity: map.capacity(),
                empty_buckets: map.empty_buckets(),
                load: map.table_load(),
                longest_chain: map.longest_chain(),
            });
        }
    }

    samples
}

fn plot_series(
    path: &str,
    caption: &str,
    y_desc: &str,
    y_max: f64,
    series: &Series,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|&(x, _)| x))
        .max()
        .unwrap_or(SAMPLE_EVERY);

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (FONT_FAMILY, TITLE_SIZE))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Number of Keys Inserted")
        .y_desc(y_desc)
        .axis_desc_style((FONT_FAMILY, TEXT_SIZE))
        .draw()?;

    for (index, (name, points)) in series.iter().enumerate() {
        let line_style = ShapeStyle::from(&COLORS[index % COLORS.len()]).stroke_width(LINE_WIDTH);

        chart
            .draw_series(LineSeries::new(points.iter().copied(), line_style))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Generate random keys once so every strategy sees the same input
    let mut rng = rand::rng();
    let keys: Vec<String> =
        (0..NUM_KEYS).map(|_| format!("key{}", rng.random_range(0..KEY_SPACE))).collect();
    info!("generated {} random keys", keys.len());

    let mut empty_share: Series = Vec::new();
    let mut load_factor: Series = Vec::new();
    let mut longest_chain: Series = Vec::new();

    for (name, hasher) in STRATEGIES {
        println!("Testing {name} starting at {INITIAL_CAPACITY} buckets");
        let samples = sample_growth(hasher, &keys);

        for sample in &samples {
            println!(
                "  {:>5} puts: empty = {:>5}, load = {:.2}, size = {:>5}, capacity = {:>5}, longest chain = {}",
                sample.inserted,
                sample.empty_buckets,
                sample.load,
                sample.len,
                sample.capacity,
                sample.longest_chain
            );
        }

        empty_share.push((
            name,
            samples
                .iter()
                .map(|s| (s.inserted, s.empty_buckets as f64 / s.capacity as f64))
                .collect(),
        ));
        load_factor.push((name, samples.iter().map(|s| (s.inserted, s.load)).collect()));
        longest_chain
            .push((name, samples.iter().map(|s| (s.inserted, s.longest_chain as f64)).collect()));
    }

    let chain_max = longest_chain
        .iter()
        .flat_map(|(_, points)| points.iter().map(|&(_, y)| y))
        .fold(1.0, f64::max) *
        1.1; // Add 10% margin

    plot_series(
        "bucket_utilization.png",
        "Share of Empty Buckets",
        "Empty Buckets / Capacity",
        1.05,
        &empty_share,
    )?;
    plot_series("load_factor.png", "Load Factor While Inserting", "Load Factor", 1.05, &load_factor)?;
    plot_series(
        "longest_chain.png",
        "Longest Chain While Inserting",
        "Entries in Longest Chain",
        chain_max,
        &longest_chain,
    )?;

    println!("Generated plot images: bucket_utilization.png, load_factor.png, longest_chain.png");

    for case in MODE_CASES {
        let mode = find_mode(case);
        println!("Input: {case:?}\nMode : {:?}, Frequency: {}\n", mode.keys, mode.frequency);
    }

    Ok(())
}
