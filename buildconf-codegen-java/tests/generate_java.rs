//! End-to-end tests for the Java backend.
//!
//! These tests drive full generation requests through [`JavaGenerator`] and
//! inspect what lands on disk. Run `cargo insta review` to update snapshots
//! when making intentional changes.

use std::fs;
use std::path::Path;

use buildconf_codegen_java::{ConfigGenerator, Error, JavaGenerator, ResolvedType, TypeRegistry};
use buildconf_core::{GenerationRequest, Provenance, Version};
use tempfile::TempDir;

/// A request mirroring the common case: a version string and a debug flag.
fn acme_request(output_dir: &Path) -> GenerationRequest {
    GenerationRequest::new("com.acme", "BuildConfig", output_dir)
        .field("VERSION", "String", "\"1.2.3\"")
        .field("DEBUG", "boolean", "false")
}

/// Generator with a pinned provenance, so assertions do not depend on the
/// crate's own version.
fn pinned_generator() -> JavaGenerator {
    JavaGenerator::new().with_provenance(Provenance::new("buildconf", Version::new(1, 0, 0)))
}

#[test]
fn test_writes_file_under_package_path() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    let written = pinned_generator()
        .generate(&acme_request(temp.path()))
        .expect("generation failed");

    let expected = temp
        .path()
        .join("com")
        .join("acme")
        .join("BuildConfig.java");
    assert_eq!(written, expected);
    assert!(expected.exists());
}

#[test]
fn test_emits_one_declaration_per_field_in_order() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let request = GenerationRequest::new("com.acme", "BuildConfig", temp.path())
        .field("VERSION", "String", "\"1.2.3\"")
        .field("DEBUG", "boolean", "false")
        .field("MAX_RETRIES", "int", "3");

    let written = pinned_generator()
        .generate(&request)
        .expect("generation failed");
    let content = fs::read_to_string(&written).expect("Failed to read generated file");

    let declarations: Vec<&str> = content
        .lines()
        .filter(|line| line.trim_start().starts_with("public static final"))
        .collect();
    assert_eq!(declarations.len(), 3);
    assert!(declarations[0].contains("String VERSION = \"1.2.3\";"));
    assert!(declarations[1].contains("boolean DEBUG = false;"));
    assert!(declarations[2].contains("int MAX_RETRIES = 3;"));
}

#[test]
fn test_regeneration_is_byte_identical() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let generator = pinned_generator();
    let request = acme_request(temp.path());

    let first_path = generator.generate(&request).expect("first run failed");
    let first = fs::read(&first_path).expect("Failed to read first output");

    let second_path = generator.generate(&request).expect("second run failed");
    let second = fs::read(&second_path).expect("Failed to read second output");

    assert_eq!(first_path, second_path);
    assert_eq!(first, second);
}

#[test]
fn test_resolution_failure_writes_nothing() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let request = GenerationRequest::new("com.acme", "BuildConfig", temp.path())
        .field("VERSION", "String", "\"1.2.3\"")
        .field("BROKEN", "123bad", "1");

    let err = pinned_generator().generate(&request).unwrap_err();

    let Error::Resolution { type_name } = err else {
        panic!("expected Resolution error");
    };
    assert_eq!(type_name, "123bad");
    assert!(
        !temp.path().join("com").exists(),
        "no output should be written on failure"
    );
}

#[test]
fn test_failed_request_leaves_previous_file_untouched() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let generator = pinned_generator();

    let path = generator
        .generate(&acme_request(temp.path()))
        .expect("first run failed");
    let before = fs::read_to_string(&path).expect("Failed to read first output");

    let broken = GenerationRequest::new("com.acme", "BuildConfig", temp.path())
        .field("BROKEN", "123bad", "1");
    generator.generate(&broken).unwrap_err();

    let after = fs::read_to_string(&path).expect("Failed to read file after failed run");
    assert_eq!(before, after);
}

#[test]
fn test_default_package_writes_at_output_root() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let request = GenerationRequest::new("", "BuildConfig", temp.path()).field(
        "DEBUG",
        "boolean",
        "false",
    );

    let written = pinned_generator()
        .generate(&request)
        .expect("generation failed");

    assert_eq!(written, temp.path().join("BuildConfig.java"));
    let content = fs::read_to_string(&written).expect("Failed to read generated file");
    assert!(!content.contains("package "));
}

#[test]
fn test_preview_matches_generated_file() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let generator = pinned_generator();
    let request = acme_request(temp.path());

    let preview = generator.preview(&request).expect("preview failed");
    assert_eq!(
        fs::read_dir(temp.path()).expect("Failed to list temp dir").count(),
        0,
        "preview must not touch the filesystem"
    );

    let written = generator.generate(&request).expect("generation failed");
    let content = fs::read_to_string(&written).expect("Failed to read generated file");

    assert_eq!(preview.content, content);
    assert_eq!(written, temp.path().join(&preview.path));
}

#[test]
fn test_custom_registry_resolves_classpath_names() {
    struct Classpath;
    impl TypeRegistry for Classpath {
        fn lookup(&self, name: &str) -> Option<ResolvedType> {
            (name == "duration").then(|| ResolvedType::named("java.time.Duration"))
        }
    }

    let temp = TempDir::new().expect("Failed to create temp dir");
    let request = GenerationRequest::new("com.acme", "BuildConfig", temp.path()).field(
        "TIMEOUT",
        "duration",
        "java.time.Duration.ofSeconds(30)",
    );

    let written = JavaGenerator::with_registry(Classpath)
        .with_provenance(Provenance::new("buildconf", Version::new(1, 0, 0)))
        .generate(&request)
        .expect("generation failed");
    let content = fs::read_to_string(&written).expect("Failed to read generated file");

    assert!(content.contains(
        "public static final java.time.Duration TIMEOUT = java.time.Duration.ofSeconds(30);"
    ));
}

#[test]
fn test_generated_class_snapshot() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let request = GenerationRequest::new("com.acme", "BuildConfig", temp.path())
        .field("VERSION", "String", "\"1.2.3\"")
        .field("DEBUG", "boolean", "false")
        .field("MAX_RETRIES", "int", "3")
        .field("WIDGET", "com.acme.Widget", "new com.acme.Widget()");

    let written = pinned_generator()
        .generate(&request)
        .expect("generation failed");
    let content = fs::read_to_string(&written).expect("Failed to read generated file");

    insta::assert_snapshot!("java_build_config", content);
}
