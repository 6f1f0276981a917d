fn main() -> anyhow::Result<()> {
    prompt_question_cli::cli::main()
}
