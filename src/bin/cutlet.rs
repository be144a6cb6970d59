use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use cutlet::config::DesignConfig;
use cutlet::construct::{enumerate_constructs, Construct};
use cutlet::export;
use cutlet::fetch;

/// Cutlet CLI
#[derive(Parser)]
#[command(name = "cutlet")]
#[command(version)]
#[command(about = "Construct planning, primer design and picklist generation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a target from AlphaFoldDB and summarise it
    Fetch {
        /// Target identifier (e.g. a UniProt accession)
        identifier: String,
    },

    /// Design primers for a construct set and write all artifacts
    Design {
        /// Target identifier to fetch from AlphaFoldDB
        #[arg(long, conflicts_with = "fasta")]
        id: Option<String>,
        /// Protein FASTA file to use instead of fetching
        #[arg(long)]
        fasta: Option<PathBuf>,
        /// N-terminal boundary residues (1-indexed), comma-separated
        #[arg(long, value_delimiter = ',')]
        nterm: Vec<usize>,
        /// C-terminal boundary residues (1-indexed), comma-separated
        #[arg(long, value_delimiter = ',')]
        cterm: Vec<usize>,
        /// Constructs CSV (columns: name,start,end); overrides --nterm/--cterm
        #[arg(long)]
        constructs: Option<PathBuf>,
        /// Directory the artifacts are written into
        #[arg(long, default_value = "cutlet_out")]
        outdir: PathBuf,
        /// Print the tables to stdout as well
        #[arg(long)]
        print: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch { identifier } => cmd_fetch(identifier),
        Commands::Design {
            id,
            fasta,
            nterm,
            cterm,
            constructs,
            outdir,
            print,
        } => cmd_design(id, fasta, nterm, cterm, constructs, outdir, print),
    }
}

fn cmd_fetch(identifier: String) -> anyhow::Result<()> {
    let target = fetch::fetch_target_data(&identifier)?;
    println!("identifier: {}", target.identifier);
    println!("length: {} residues", target.sequence_length());
    println!("structure: {}", target.structure_url);
    println!("sequence: {}", target.sequence);
    Ok(())
}

fn cmd_design(
    id: Option<String>,
    fasta: Option<PathBuf>,
    nterm: Vec<usize>,
    cterm: Vec<usize>,
    constructs_csv: Option<PathBuf>,
    outdir: PathBuf,
    print: bool,
) -> anyhow::Result<()> {
    let target = match (&id, &fasta) {
        (Some(id), None) => fetch::fetch_target_data(id)?,
        (None, Some(path)) => fetch::target_from_fasta(path)?,
        _ => anyhow::bail!("exactly one of --id or --fasta is required"),
    };
    eprintln!(
        "design: target={} | {} residues",
        target.identifier,
        target.sequence_length()
    );

    let cfg = DesignConfig::default();
    let constructs: Vec<Construct> = match constructs_csv {
        Some(path) => export::read_constructs_csv(&path, target.sequence_length())?,
        None => enumerate_constructs(&target, &nterm, &cterm)?,
    };
    eprintln!("design: {} constructs", constructs.len());

    let plan = cutlet::plan_synthesis(&target, &constructs, &cfg)?;
    eprintln!(
        "design: {} unique primers on the source plate, {} transfers",
        plan.primer_plate.filled().count(),
        plan.picklist.records.len()
    );

    std::fs::create_dir_all(&outdir)
        .with_context(|| format!("creating {}", outdir.display()))?;

    let mut construct_df = export::construct_dataframe(&plan.construct_table)?;
    let mut order_df = export::order_form_dataframe(&plan.primer_plate)?;
    let mut picklist_df = export::picklist_dataframe(&plan.picklist)?;

    export::write_csv(&mut construct_df, &outdir.join("construct_table.csv"))?;
    export::write_csv(&mut order_df, &outdir.join("primer_order_form.csv"))?;
    export::write_order_form_xlsx(&plan.primer_plate, &outdir.join("primer_order_form.xlsx"))?;
    export::write_csv(&mut picklist_df, &outdir.join("echo_picklist.csv"))?;
    eprintln!("design: artifacts written to {}", outdir.display());

    if print {
        export::configure_table_display();
        println!("{}", construct_df);
        println!("{}", picklist_df);
    }

    Ok(())
}
