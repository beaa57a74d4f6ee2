fn main() {
    respak_build::ResourceIdGenerator::builder()
        .pack(true)
        .build()
        .generate()
        .expect("failed to generate resource identifiers");
}
