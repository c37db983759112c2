use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ecsig_crypto::{
    run_workflow, verify_digest, Digest, HashAlgorithm, NonceMode, OsEntropy, P256Engine,
    PublicKey, SignEngine, Signature, Transcript,
};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::{debug, info, Level};

#[derive(Parser)]
#[command(name = "ecsig", version, about = "ECDSA P-256 keygen / hash / sign / verify")]
struct Cli {
    /// Config file (default: ~/.ecsig/config.json)
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    log_level: Option<Level>,
    /// Print machine-readable JSON instead of text
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Generate a key pair, hash the message, sign it and verify the signature
    Demo {
        #[arg(long)]
        message: Option<String>,
        #[arg(long)]
        hash: Option<HashAlgorithm>,
        #[arg(long)]
        nonce: Option<NonceMode>,
    },
    /// Print the digest of a message
    Hash {
        #[arg(long)]
        message: String,
        #[arg(long)]
        hash: Option<HashAlgorithm>,
    },
    /// Check a hex signature against a hex digest and SEC1 public key
    Verify {
        #[arg(long)]
        public_key: String,
        #[arg(long)]
        digest: String,
        #[arg(long)]
        signature: String,
    },
    /// Show the effective configuration
    Config {
        #[arg(long)]
        save: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct Config {
    message: String,
    hash: HashAlgorithm,
    nonce_mode: NonceMode,
    log_level: String,
    json: bool,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            message: "i love you".to_string(),
            hash: HashAlgorithm::Sha256,
            nonce_mode: NonceMode::Hedged,
            log_level: "warn".to_string(),
            json: false,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = cli.config.clone().unwrap_or_else(config_path);
    let mut cfg = load_config(&path)?.unwrap_or_default();

    if let Some(level) = cli.log_level {
        cfg.log_level = level.to_string();
    }
    if cli.json {
        cfg.json = true;
    }
    init_tracing(&cfg.log_level)?;
    debug!(config = %path.display(), "configuration loaded");

    match cli.cmd {
        None => cmd_demo(&cfg),
        Some(Cmd::Demo {
            message,
            hash,
            nonce,
        }) => {
            let mut cfg2 = cfg.clone();
            if let Some(m) = message {
                cfg2.message = m;
            }
            if let Some(h) = hash {
                cfg2.hash = h;
            }
            if let Some(n) = nonce {
                cfg2.nonce_mode = n;
            }
            cmd_demo(&cfg2)
        }
        Some(Cmd::Hash { message, hash }) => cmd_hash(&cfg, &message, hash.unwrap_or(cfg.hash)),
        Some(Cmd::Verify {
            public_key,
            digest,
            signature,
        }) => cmd_verify(&cfg, &public_key, &digest, &signature),
        Some(Cmd::Config { save }) => cmd_config(&cfg, &path, save),
    }
}

fn init_tracing(level: &str) -> Result<()> {
    let level: Level = level
        .parse()
        .with_context(|| format!("invalid log level {level:?}"))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

/* ---------- commands ---------- */

fn cmd_demo(cfg: &Config) -> Result<()> {
    let engine = P256Engine::new(cfg.hash, cfg.nonce_mode);
    let transcript =
        run_workflow(&engine, &cfg.message, &mut OsEntropy).context("signature workflow failed")?;
    info!(verified = transcript.verified, "demo finished");
    print_transcript(cfg, &transcript)
}

fn cmd_hash(cfg: &Config, message: &str, hash: HashAlgorithm) -> Result<()> {
    let engine = P256Engine::new(hash, cfg.nonce_mode);
    let digest = engine.digest(message.as_bytes());
    if cfg.json {
        let out = serde_json::json!({ "hash": hash, "digest": digest.to_hex() });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", digest.to_hex());
    }
    Ok(())
}

fn cmd_verify(cfg: &Config, public_key: &str, digest: &str, signature: &str) -> Result<()> {
    let pk = PublicKey::from_hex(public_key).context("decoding public key")?;
    let digest = Digest::from_hex(digest).context("decoding digest")?;
    let sig = Signature::from_hex(signature).context("decoding signature")?;
    let ok = verify_digest(&pk, &digest, &sig);
    if cfg.json {
        println!("{}", serde_json::json!({ "verified": ok }));
    } else {
        println!("{ok}");
    }
    Ok(())
}

fn cmd_config(cfg: &Config, path: &PathBuf, save: bool) -> Result<()> {
    if save {
        save_config(path, cfg)?;
        info!(path = %path.display(), "configuration saved");
    }
    println!("{}", serde_json::to_string_pretty(cfg)?);
    Ok(())
}

fn print_transcript(cfg: &Config, t: &Transcript) -> Result<()> {
    if cfg.json {
        println!("{}", serde_json::to_string_pretty(t)?);
        return Ok(());
    }
    println!("curve         = {}", t.curve);
    println!("publicKey     = {}\n", t.public_key);
    println!("hashedMessage = {}\n", t.digest);
    println!("signature     = {}\n", t.signature);
    println!("{}", t.verified);
    Ok(())
}

/* ---------- config file ---------- */

fn ecsig_dir() -> PathBuf {
    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    home.join(".ecsig")
}
fn config_path() -> PathBuf {
    ecsig_dir().join("config.json")
}

/// A missing file means defaults; an unreadable or malformed one is an error.
fn load_config(path: &PathBuf) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }
    let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let cfg = serde_json::from_str(&s).with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(cfg))
}
fn save_config(path: &PathBuf, cfg: &Config) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, serde_json::to_string_pretty(cfg)?)?;
    Ok(())
}
