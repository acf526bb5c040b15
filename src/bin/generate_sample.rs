use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const GENRES: [&str; 8] = [
    "Sports", "Action", "Strategy", "Racing", "Shooter", "Role-Playing", "Puzzle", "Platform",
];
const RATINGS: [&str; 4] = ["E", "T", "M", "E10+"];
const PLATFORMS: [&str; 5] = ["PS2", "PS3", "X360", "Wii", "PC"];
const FIRST_YEAR: i64 = 2000;
const LAST_YEAR: i64 = 2016;
const GAMES: usize = 2500;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let mut names: Vec<String> = Vec::with_capacity(GAMES);
    let mut platforms: Vec<&str> = Vec::with_capacity(GAMES);
    let mut genres: Vec<&str> = Vec::with_capacity(GAMES);
    let mut ratings: Vec<&str> = Vec::with_capacity(GAMES);
    let mut years: Vec<i64> = Vec::with_capacity(GAMES);
    let mut critic: Vec<Option<f64>> = Vec::with_capacity(GAMES);
    let mut user: Vec<Option<f64>> = Vec::with_capacity(GAMES);

    let span = (LAST_YEAR - FIRST_YEAR + 1) as u64;

    for i in 0..GAMES {
        let genre = rng.pick(&GENRES);
        let critic_score = rng.gauss(70.0, 12.0).clamp(13.0, 98.0).round();
        // User scores track critics on a 0-10 scale with their own noise.
        let user_score = (critic_score / 10.0 + rng.gauss(0.0, 0.9)).clamp(0.0, 9.7);

        names.push(format!("{genre} Game {i:04}"));
        platforms.push(rng.pick(&PLATFORMS));
        genres.push(genre);
        ratings.push(rng.pick(&RATINGS));
        years.push(FIRST_YEAR + (rng.next_u64() % span) as i64);
        // Roughly one game in six has no critic score, one in eight no user score.
        critic.push((rng.next_f64() > 1.0 / 6.0).then_some(critic_score));
        user.push((rng.next_f64() > 1.0 / 8.0).then_some((user_score * 10.0).round() / 10.0));
    }

    let schema = Arc::new(Schema::new(vec![
        Field::new("Name", DataType::Utf8, false),
        Field::new("Platform", DataType::Utf8, false),
        Field::new("Year_of_Release", DataType::Int64, false),
        Field::new("Genre", DataType::Utf8, false),
        Field::new("Critic_Score", DataType::Float64, true),
        Field::new("User_Score", DataType::Float64, true),
        Field::new("Rating", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(
                names.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(platforms)),
            Arc::new(Int64Array::from(years)),
            Arc::new(StringArray::from(genres)),
            Arc::new(Float64Array::from(critic)),
            Arc::new(Float64Array::from(user)),
            Arc::new(StringArray::from(ratings)),
        ],
    )
    .expect("Failed to create RecordBatch");

    // Write Parquet
    let output_path = "Norm_games.parquet";
    let file = std::fs::File::create(output_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!("Wrote {GAMES} games ({FIRST_YEAR}-{LAST_YEAR}) to {output_path}");
}
