fn main() -> anyhow::Result<()> {
    macroexpand_rust::run()
}
