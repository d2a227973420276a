//! Random bit-commitment trial harness.
//!
//! Each trial commits a random 16-bit message as a Merkle tree of one-bit
//! leaves, proves a random bit, and checks both the honest verification
//! (must pass) and a flipped-bit verification (must fail). Message/root
//! pairs are appended to a CSV for downstream hiding analysis of the
//! chosen digest function.

use std::{
    env,
    fs::File,
    io::{BufWriter, Write},
    process::ExitCode,
};

use bitcommit_merkle_tree::{
    Blake3Hasher, Djb2Hasher, MerkleCommitmentError, MerkleCommitmentTree, PrimeHasher, TreeHasher,
    verify_membership,
};
use rand::RngExt;
use thiserror::Error;

/// Width of each committed message, in bits.
const MESSAGE_BITS: usize = 16;
const DEFAULT_SAMPLES: usize = 10_000;
const DEFAULT_CSV_PATH: &str = "merkle_data.csv";

#[derive(Debug, Error)]
enum HarnessError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Tree(#[from] MerkleCommitmentError),
    #[error("usage: bitcommit-harness [samples] [blake3|djb2|prime] [csv path]: {0}")]
    Usage(String),
    #[error("trial failed: {0}")]
    TrialFailed(String),
}

/// Render a `u16` message as one-bit leaves, MSB first.
fn bit_leaves(message: u16) -> Vec<Vec<u8>> {
    (0..MESSAGE_BITS)
        .map(|i| {
            if message >> (MESSAGE_BITS - 1 - i) & 1 == 1 {
                b"1".to_vec()
            } else {
                b"0".to_vec()
            }
        })
        .collect()
}

/// One honest trial: build, prove a random bit, verify. Returns the root.
fn trial_pass<H: TreeHasher, R: RngExt>(
    hasher: &H,
    rng: &mut R,
    message: u16,
) -> Result<[u8; 32], HarnessError> {
    let leaves = bit_leaves(message);
    let tree = MerkleCommitmentTree::build(hasher, &leaves)?;
    let root = tree.root_hash();

    let index = rng.random_range(0..MESSAGE_BITS);
    let proof = tree.prove_at(&leaves, index)?;
    if !proof.verify(hasher, &root, index, MESSAGE_BITS) {
        return Err(HarnessError::TrialFailed(format!(
            "honest proof for message {message} bit {index} did not verify"
        )));
    }
    Ok(root)
}

/// One tamper trial: flip the claimed bit, verification must fail.
fn trial_tamper<H: TreeHasher, R: RngExt>(
    hasher: &H,
    rng: &mut R,
    message: u16,
) -> Result<(), HarnessError> {
    let leaves = bit_leaves(message);
    let tree = MerkleCommitmentTree::build(hasher, &leaves)?;
    let root = tree.root_hash();

    let index = rng.random_range(0..MESSAGE_BITS);
    let proof = tree.prove_at(&leaves, index)?;
    let tampered: &[u8] = if proof.leaf_value == b"1" { b"0" } else { b"1" };
    if verify_membership(hasher, &root, tampered, index, MESSAGE_BITS, &proof.siblings) {
        return Err(HarnessError::TrialFailed(format!(
            "tampered proof for message {message} bit {index} verified"
        )));
    }
    Ok(())
}

/// Run `samples` pass + tamper trial pairs, logging message/root rows.
fn run_trials<H: TreeHasher, R: RngExt>(
    hasher: &H,
    rng: &mut R,
    samples: usize,
    out: &mut impl Write,
) -> Result<(), HarnessError> {
    writeln!(out, "BinaryMessage,RootHash")?;
    for _ in 0..samples {
        let message: u16 = rng.random();
        let root = trial_pass(hasher, rng, message)?;
        writeln!(out, "{},{}", message, hex::encode(root))?;
        let tamper_message: u16 = rng.random();
        trial_tamper(hasher, rng, tamper_message)?;
    }
    Ok(())
}

fn run() -> Result<(), HarnessError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let samples = match args.first() {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| HarnessError::Usage(format!("bad sample count {raw:?}")))?,
        None => DEFAULT_SAMPLES,
    };
    let hasher_name = args.get(1).map(String::as_str).unwrap_or("blake3");
    let csv_path = args.get(2).map(String::as_str).unwrap_or(DEFAULT_CSV_PATH);

    let mut out = BufWriter::new(File::create(csv_path)?);
    let mut rng = rand::rng();
    match hasher_name {
        "blake3" => run_trials(&Blake3Hasher, &mut rng, samples, &mut out)?,
        "djb2" => run_trials(&Djb2Hasher, &mut rng, samples, &mut out)?,
        "prime" => run_trials(&PrimeHasher, &mut rng, samples, &mut out)?,
        other => return Err(HarnessError::Usage(format!("unknown hasher {other:?}"))),
    }
    out.flush()?;

    println!("{csv_path} created with {samples} entries ({hasher_name})");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
