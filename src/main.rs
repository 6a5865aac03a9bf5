fn main() -> anyhow::Result<()> {
    traceytext::run()
}
