fn main() -> anyhow::Result<()> {
    review_harness::run()
}
