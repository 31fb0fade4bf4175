//! Command-line front end for the `grobner` crate.
//!
//! Usage: `grobner_cli <mode> [--order=...] [--vars-order=1,3,2]
//! [--variant=...] [--modulus=N]`, reading the polynomials each mode needs
//! from standard input in the TeX-like notation the crate parses.

use std::io::{self, Read};

use grobner::{
    build_minimum_basis, buchberger, format_polynomial, format_system, is_member, normal_form,
    parse_polynomial, parse_system, BuchbergerVariant, Context, MonomialOrdering, VarOrder,
};

#[cfg(feature = "field-float")]
type CoeffField = grobner::field::FloatField;
#[cfg(all(feature = "field-zp", not(feature = "field-float")))]
type CoeffField = grobner::field::ZpField;
#[cfg(not(any(feature = "field-float", feature = "field-zp")))]
type CoeffField = grobner::field::RationalField;

#[cfg(feature = "field-float")]
fn template(_modulus: Option<u64>) -> CoeffField {
    CoeffField(0.0)
}
#[cfg(all(feature = "field-zp", not(feature = "field-float")))]
fn template(modulus: Option<u64>) -> CoeffField {
    CoeffField::new(0, modulus.unwrap_or(2))
}
#[cfg(not(any(feature = "field-float", feature = "field-zp")))]
fn template(_modulus: Option<u64>) -> CoeffField {
    CoeffField::from_int(0)
}

struct Config {
    mode: String,
    ordering: MonomialOrdering,
    var_order: VarOrder,
    variant: BuchbergerVariant,
    modulus: Option<u64>,
}

fn parse_args(args: &[String]) -> Config {
    let mode = args.first().cloned().unwrap_or_else(|| "help".to_string());
    let mut ordering = MonomialOrdering::Lex;
    let mut var_order = VarOrder::canonical();
    let mut variant = BuchbergerVariant::Default;
    let mut modulus = None;

    for arg in args.iter().skip(1) {
        if let Some(value) = arg.strip_prefix("--order=") {
            if let Some(o) = MonomialOrdering::from_name(value) {
                ordering = o;
            } else {
                eprintln!("unknown ordering '{value}', falling back to lex");
            }
        } else if let Some(value) = arg.strip_prefix("--vars-order=") {
            let ids: Option<Vec<u32>> = value.split(',').map(|s| s.trim().parse().ok()).collect();
            match ids {
                Some(ids) if !ids.is_empty() => var_order = VarOrder::permutation(ids),
                _ => eprintln!("invalid --vars-order value '{value}', ignoring"),
            }
        } else if let Some(value) = arg.strip_prefix("--variant=") {
            variant = match value {
                "default" => BuchbergerVariant::Default,
                "do-not-repeat" => BuchbergerVariant::DoNotRepeat,
                "skip-coprime" => BuchbergerVariant::SkipCoprime,
                "lcm-criterion" => BuchbergerVariant::LcmCriterion,
                other => {
                    eprintln!("unknown variant '{other}', falling back to default");
                    BuchbergerVariant::Default
                }
            };
        } else if let Some(value) = arg.strip_prefix("--modulus=") {
            match value.parse() {
                Ok(m) => modulus = Some(m),
                Err(_) => eprintln!("invalid --modulus value '{value}', ignoring"),
            }
        } else {
            eprintln!("ignoring unrecognized argument '{arg}'");
        }
    }

    Config { mode, ordering, var_order, variant, modulus }
}

fn read_stdin() -> String {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf).expect("failed to read standard input");
    buf
}

/// Split off the first line (a single polynomial) from the rest of the
/// input (a polynomial system, `;`-separated, spanning the remaining
/// lines verbatim -- newlines count as ordinary whitespace to the parser).
fn split_first_line(input: &str) -> (&str, &str) {
    match input.find('\n') {
        Some(i) => (&input[..i], &input[i + 1..]),
        None => (input, ""),
    }
}

fn print_help() {
    println!("Available modes:");
    println!("  elementary-reduction  reduce one polynomial by another, one step");
    println!("  reduction             fully reduce a polynomial by a system");
    println!("  s-polynomial          compute the S-polynomial of two polynomials");
    println!("  buchberger            run Buchberger's algorithm on a system");
    println!("  autoreduction         autoreduce a system of polynomials");
    println!("  minimum-basis         build the minimum Groebner basis of a system");
    println!("  membership            test whether a polynomial lies in a basis' ideal");
    println!("  help                  show this message");
    println!();
    println!("Polynomials are entered in TeX-like notation without whitespace inside a");
    println!("monomial, variables as x_N or x_{{N}} optionally followed by ^K or ^{{K}}.");
    println!("A system is a leading count, then that many ';'-separated");
    println!("polynomials, e.g. '2 x_1+1; x_2-1.'.");
    println!();
    println!("Flags: --order=lex|grlex|grevlex|invlex, --vars-order=3,1,2,");
    println!("--variant=default|do-not-repeat|skip-coprime|lcm-criterion,");
    println!("--modulus=N (Z_p field builds only).");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args);
    let ctx = Context::new(config.var_order, config.ordering);
    let field = template(config.modulus);

    match config.mode.as_str() {
        "elementary-reduction" => {
            let input = read_stdin();
            let mut lines = input.lines();
            let p = parse_polynomial(&ctx, &field, lines.next().unwrap_or("0")).expect("invalid polynomial");
            let d = parse_polynomial(&ctx, &field, lines.next().unwrap_or("0")).expect("invalid divisor");
            match p.elementary_reduce(&ctx, &d) {
                Some(r) => println!("Result: {}", format_polynomial(&r)),
                None => println!("Not reducible by the given polynomial."),
            }
        }
        "reduction" => {
            let input = read_stdin();
            let (first, rest) = split_first_line(&input);
            let p = parse_polynomial(&ctx, &field, first).expect("invalid polynomial");
            let system = parse_system(&ctx, &field, rest).expect("invalid system");
            println!("Result: {}", format_polynomial(&normal_form(&ctx, &p, &system)));
        }
        "s-polynomial" => {
            let input = read_stdin();
            let mut lines = input.lines();
            let p1 = parse_polynomial(&ctx, &field, lines.next().unwrap_or("0")).expect("invalid first polynomial");
            let p2 = parse_polynomial(&ctx, &field, lines.next().unwrap_or("0")).expect("invalid second polynomial");
            match p1.s_polynomial(&ctx, &p2) {
                Some(s) => println!("Result: {}", format_polynomial(&s)),
                None => println!("Both polynomials must be non-zero."),
            }
        }
        "buchberger" => {
            let input = read_stdin();
            let system = parse_system(&ctx, &field, &input).expect("invalid system");
            let basis = buchberger(&ctx, system, config.variant);
            println!("Result: {}", format_system(&basis));
        }
        "autoreduction" => {
            let input = read_stdin();
            let system = parse_system(&ctx, &field, &input).expect("invalid system");
            let reduced = grobner::autoreduce(&ctx, &system);
            println!("Result: {}", format_system(&reduced));
        }
        "minimum-basis" => {
            let input = read_stdin();
            let system = parse_system(&ctx, &field, &input).expect("invalid system");
            let basis = build_minimum_basis(&ctx, system, config.variant);
            println!("Result: {}", format_system(&basis));
        }
        "membership" => {
            let input = read_stdin();
            let (first, rest) = split_first_line(&input);
            let p = parse_polynomial(&ctx, &field, first).expect("invalid polynomial");
            let generators = parse_system(&ctx, &field, rest).expect("invalid basis");
            // is_member/normal_form are only a valid membership oracle against a
            // Groebner basis (spec §4.4's ideal.contains runs Buchberger first);
            // the input here is an arbitrary generating set, not necessarily one.
            let basis = build_minimum_basis(&ctx, generators, config.variant);
            println!("Member: {}", is_member(&ctx, &p, &basis));
        }
        "help" => print_help(),
        other => {
            println!("Unknown mode '{other}'.");
            print_help();
        }
    }
}
