use std::fs;
use std::io;
use std::path::Path;

use serde_json;
use structopt::StructOpt;

use csvlog::cliopt::CliOpt;
use csvlog::logger::CsvLogger;
use csvlog::reader::LineReader;
use csvlog::runner::Runner;

#[test]
fn e2e() -> Result<(), Box<dyn std::error::Error>> {
    let root_test_dir = Path::new(file!()).parent().unwrap().join("scenarios");

    for test_dir in fs::read_dir(&root_test_dir)? {
        let test_dir = test_dir?.path();

        if let Ok(filter) = std::env::var("E2E_CASE") {
            if !test_dir.as_os_str().to_string_lossy().ends_with(&filter) {
                continue;
            }
        }

        let cli_args: Vec<String> =
            serde_json::from_str(&fs::read_to_string(test_dir.join("args.json"))?)?;

        let case = test_dir.file_name().unwrap().to_string_lossy().to_string();
        let output_path = std::env::temp_dir().join(format!(
            "csvlog-e2e-{}-{}.csv",
            std::process::id(),
            case
        ));

        run(
            Box::new(io::BufReader::new(fs::File::open(test_dir.join("input"))?)),
            &cli_args,
            &output_path,
        )?;

        let actual_output = fs::read(&output_path)?;
        let expected_output = fs::read(test_dir.join("output"))?;
        fs::remove_file(&output_path)?;

        assert_eq!(
            expected_output,
            actual_output,
            "\nUnexpected output in '{}'.\nExpected:\n{}\nActual:\n{}",
            test_dir.display(),
            String::from_utf8_lossy(&expected_output),
            String::from_utf8_lossy(&actual_output),
        );
    }

    Ok(())
}

fn run(
    input_reader: Box<dyn io::BufRead>,
    cli_args: &[String],
    output_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = vec!["csvlog".to_string()];
    args.extend_from_slice(cli_args);
    args.push(output_path.to_string_lossy().to_string());
    let opt = CliOpt::from_iter(&args);

    let mut logger = CsvLogger::from_config(&opt.logger_config()?);
    logger.open()?;
    assert!(logger.to_string().starts_with("CSV File ["));

    Runner::new(LineReader::new(input_reader), &mut logger).run()?;
    logger.close()?;
    assert_eq!("CSV File not opened yet.", logger.to_string());

    Ok(())
}

#[test]
fn e2e_not_open() {
    let mut logger = CsvLogger::new();
    let res = Runner::new(LineReader::new(&b"[\"a\", \"b\"]\n"[..]), &mut logger).run();
    match res {
        Err(e) => assert_eq!(csvlog::error::ErrorKind::NotOpen, e.kind()),
        Ok(_) => panic!("runner should fail on a logger that was never opened"),
    }
}
