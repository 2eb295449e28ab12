fn main() -> anyhow::Result<()> {
    patience::run()
}
