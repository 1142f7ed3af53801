// Build script that generates Rust code from the pinned metadata.
// Build scripts are not part of the hashing path, so we allow expect() and panic().
#![allow(clippy::expect_used, clippy::panic)]
//
// Consumes `metadata.json` and the parameter file it names, and generates:
// - `error_generated.rs` - ErrorCode enum with codes and C status values
// - `modulus_generated.rs` - BN254 scalar field modulus constants
// - `params_generated.rs` - Poseidon round constants and MDS matrices per width

use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::env;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Metadata {
    version: String,
    field: FieldMetadata,
    params_file: String,
    errors: Vec<ErrorInfo>,
}

#[derive(Debug, Deserialize)]
struct FieldMetadata {
    name: String,
    modulus: String,
    modulus_hex: String,
}

#[derive(Debug, Deserialize)]
struct ErrorInfo {
    name: String,
    code: u32,
    status: i32,
    params: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ParamsFile {
    name: String,
    sbox_alpha: u64,
    full_rounds: usize,
    digest: String,
    widths: Vec<WidthParams>,
}

#[derive(Debug, Deserialize)]
struct WidthParams {
    width: usize,
    partial_rounds: usize,
    round_constants: Vec<String>,
    mds_matrix: Vec<Vec<String>>,
}

fn main() {
    println!("cargo:rerun-if-changed=metadata.json");
    println!("cargo:rerun-if-changed=build.rs");

    let metadata_content =
        fs::read_to_string("metadata.json").expect("Failed to read metadata.json");
    let metadata: Metadata =
        serde_json::from_str(&metadata_content).expect("Failed to parse metadata.json");

    if metadata.version != "1" {
        panic!(
            "Unexpected metadata version '{}', expected '1'",
            metadata.version
        );
    }

    println!("cargo:rerun-if-changed={}", metadata.params_file);
    let params_content = fs::read_to_string(&metadata.params_file)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", metadata.params_file, e));
    let params: ParamsFile =
        serde_json::from_str(&params_content).expect("Failed to parse parameter file");

    validate_params(&params);

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let out_path = Path::new(&out_dir);

    generate_error_rs(out_path, &metadata.errors);
    generate_modulus_rs(out_path, &metadata.field);
    generate_params_rs(out_path, &params);
}

/// Strip an optional `0x` prefix and check the digit count.
fn bare_hex(value: &str) -> &str {
    let bare = value.strip_prefix("0x").unwrap_or(value);
    if bare.len() != 64 {
        panic!("Constant {} is not 64 hex digits", value);
    }
    bare
}

fn validate_params(params: &ParamsFile) {
    if params.full_rounds % 2 != 0 {
        panic!("full_rounds must be even, got {}", params.full_rounds);
    }
    if params.widths.is_empty() {
        panic!("Parameter file {} defines no widths", params.name);
    }

    let mut hasher = Sha256::new();
    let first = params.widths[0].width;
    for (i, w) in params.widths.iter().enumerate() {
        if w.width != first + i {
            panic!("Widths must be contiguous, found {} at index {}", w.width, i);
        }
        let rounds = params.full_rounds + w.partial_rounds;
        if w.round_constants.len() != w.width * rounds {
            panic!(
                "Width {}: expected {} round constants, found {}",
                w.width,
                w.width * rounds,
                w.round_constants.len()
            );
        }
        if w.mds_matrix.len() != w.width || w.mds_matrix.iter().any(|r| r.len() != w.width) {
            panic!("Width {}: MDS matrix is not {}x{}", w.width, w.width, w.width);
        }

        for c in w.round_constants.iter().chain(w.mds_matrix.iter().flatten()) {
            let bytes = hex::decode(bare_hex(c)).expect("Invalid hex constant");
            hasher.update(&bytes);
        }
    }

    let digest = hex::encode(hasher.finalize());
    if digest != params.digest {
        panic!(
            "Parameter digest mismatch for {}: file says {}, constants hash to {}",
            params.name, params.digest, digest
        );
    }
}

fn generate_error_rs(out_path: &Path, errors: &[ErrorInfo]) {
    let mut code = String::new();

    // Use outer doc comments for include!() compatibility
    code.push_str(
        r#"// Error codes generated from metadata.json.
//
// DO NOT EDIT - This file is generated by build.rs

use thiserror::Error;

/// Every failure the hasher can report.
///
/// Each variant has a stable numeric code and a negative status value used at
/// the C boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
"#,
    );

    for error in errors {
        let variant_name = error.name.clone();
        let doc = format!(
            "    /// {} (code {}, status {})\n",
            variant_name, error.code, error.status
        );
        code.push_str(&doc);

        if error.params.is_empty() {
            code.push_str(&format!(
                "    #[error(\"{}\")]\n    {},\n\n",
                variant_name, variant_name
            ));
        } else {
            let params: Vec<String> = error
                .params
                .iter()
                .map(|p| {
                    let ty = param_type(p);
                    format!("/* {} */ {}", p, ty)
                })
                .collect();
            let param_refs: Vec<String> =
                (0..error.params.len()).map(|i| format!("{{{}}}", i)).collect();
            code.push_str(&format!(
                "    #[error(\"{name}({refs})\")]\n    {name}({params}),\n\n",
                name = variant_name,
                refs = param_refs.join(", "),
                params = params.join(", ")
            ));
        }
    }

    code.push_str("}\n\n");

    code.push_str(&accessor(
        errors,
        "Get the numeric error code.",
        "code",
        "u32",
        |e| e.code.to_string(),
    ));
    code.push_str(&accessor(
        errors,
        "Get the negative status returned across the C boundary.",
        "status",
        "i32",
        |e| e.status.to_string(),
    ));
    code.push_str(&accessor(
        errors,
        "Get the error name as a string.",
        "name",
        "&'static str",
        |e| format!("\"{}\"", e.name),
    ));

    code.push_str(
        r#"
/// Result type for hashing operations.
pub type PoseidonResult<T> = Result<T, ErrorCode>;
"#,
    );

    fs::write(out_path.join("error_generated.rs"), code)
        .expect("Failed to write error_generated.rs");
}

/// Emit one `impl ErrorCode` block holding a single match-based accessor.
fn accessor(
    errors: &[ErrorInfo],
    doc: &str,
    fn_name: &str,
    ret: &str,
    value: impl Fn(&ErrorInfo) -> String,
) -> String {
    let mut code = format!(
        "impl ErrorCode {{\n    /// {}\n    pub fn {}(&self) -> {} {{\n        match self {{\n",
        doc, fn_name, ret
    );
    for error in errors {
        let pattern = if error.params.is_empty() {
            error.name.clone()
        } else {
            let wildcards = vec!["_"; error.params.len()].join(", ");
            format!("{}({})", error.name, wildcards)
        };
        code.push_str(&format!(
            "            ErrorCode::{} => {},\n",
            pattern,
            value(error)
        ));
    }
    code.push_str("        }\n    }\n}\n\n");
    code
}

fn param_type(param_name: &str) -> &'static str {
    match param_name {
        "got" | "size" | "limit" | "length" | "count" | "width" | "required" | "capacity" => {
            "u64"
        }
        // String for value, expected, reason, and all others
        _ => "String",
    }
}

fn generate_modulus_rs(out_path: &Path, field: &FieldMetadata) {
    let code = format!(
        r#"// Field modulus generated from metadata.json.
//
// DO NOT EDIT - This file is generated by build.rs

/// Name of the scalar field.
pub const FIELD_NAME: &str = "{}";

/// Scalar field modulus as decimal string.
pub const MODULUS_DECIMAL: &str = "{}";

/// Scalar field modulus as 64-char hex (big-endian).
pub const MODULUS_HEX: &str = "{}";
"#,
        field.name, field.modulus, field.modulus_hex
    );

    fs::write(out_path.join("modulus_generated.rs"), code)
        .expect("Failed to write modulus_generated.rs");
}

fn generate_params_rs(out_path: &Path, params: &ParamsFile) {
    let mut code = String::new();
    let count = params.widths.len();
    let min_width = params.widths[0].width;
    let max_width = min_width + count - 1;

    code.push_str(&format!(
        r#"// Poseidon parameters generated from {name}.
//
// DO NOT EDIT - This file is generated by build.rs

/// Name of the pinned parameter set.
pub const PARAMS_NAME: &str = "{name}";

/// SHA-256 over every constant (big-endian, widths ascending, round constants then MDS).
pub const PARAMS_DIGEST: &str = "{digest}";

/// Number of full rounds, split evenly before and after the partial rounds.
pub const FULL_ROUNDS: usize = {full};

/// S-box exponent.
pub const SBOX_ALPHA: u64 = {alpha};

/// Smallest supported state width.
pub const MIN_WIDTH: usize = {min};

/// Largest supported state width.
pub const MAX_WIDTH: usize = {max};

"#,
        name = params.name,
        digest = params.digest,
        full = params.full_rounds,
        alpha = params.sbox_alpha,
        min = min_width,
        max = max_width,
    ));

    code.push_str("/// Partial rounds, indexed by `width - MIN_WIDTH`.\n");
    let partial: Vec<String> = params
        .widths
        .iter()
        .map(|w| w.partial_rounds.to_string())
        .collect();
    code.push_str(&format!(
        "pub const PARTIAL_ROUNDS: [usize; {}] = [{}];\n\n",
        count,
        partial.join(", ")
    ));

    code.push_str(
        "/// Round constants as big-endian hex, `width` per round, indexed by `width - MIN_WIDTH`.\n",
    );
    code.push_str(&format!(
        "pub(crate) const ROUND_CONSTANTS: [&[&str]; {}] = [\n",
        count
    ));
    for w in &params.widths {
        code.push_str(&format!("    // Width {}\n    &[\n", w.width));
        for c in &w.round_constants {
            code.push_str(&format!("        \"{}\",\n", bare_hex(c)));
        }
        code.push_str("    ],\n");
    }
    code.push_str("];\n\n");

    code.push_str(
        "/// MDS matrices as big-endian hex in row-major order, indexed by `width - MIN_WIDTH`.\n",
    );
    code.push_str(&format!(
        "pub(crate) const MDS_MATRICES: [&[&str]; {}] = [\n",
        count
    ));
    for w in &params.widths {
        code.push_str(&format!("    // Width {}\n    &[\n", w.width));
        for c in w.mds_matrix.iter().flatten() {
            code.push_str(&format!("        \"{}\",\n", bare_hex(c)));
        }
        code.push_str("    ],\n");
    }
    code.push_str("];\n");

    fs::write(out_path.join("params_generated.rs"), code)
        .expect("Failed to write params_generated.rs");
}
