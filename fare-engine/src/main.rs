use std::path::PathBuf;
use std::process::ExitCode;

use fare_engine::calculator::calculate_fare;
use fare_engine::domain::{FareCalculation, IntegrationLocation, ServiceType};
use fare_engine::tariff::{FareTable, bhtrans_tariff};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Uso: fare-engine [OPÇÕES] <SERVIÇO,SERVIÇO,...>

Calcula a tarifa de uma viagem pela matriz de integração de Belo Horizonte.

Argumentos:
  <SERVIÇO,...>        códigos separados por vírgula, na ordem de embarque
                       (troncais_move, troncais_convencionais, estruturais,
                       alimentadoras, circular, vilas_favelas, metro)

Opções:
  --transfers LOC,...  local de cada integração, na ordem (at_station ou
                       outside_station; o padrão é outside_station)
  --fares ARQUIVO      carrega a tabela tarifária de um arquivo JSON em vez
                       da tabela embutida
  --help               mostra esta ajuda
";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Erro: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let mut fares_path: Option<PathBuf> = None;
    let mut transfers: Vec<IntegrationLocation> = Vec::new();
    let mut trip: Option<Vec<ServiceType>> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print!("{USAGE}");
                return Ok(());
            }
            "--fares" => {
                let value = iter.next().ok_or("--fares precisa de um caminho")?;
                fares_path = Some(PathBuf::from(value));
            }
            "--transfers" => {
                let value = iter.next().ok_or("--transfers precisa de uma lista")?;
                transfers = value
                    .split(',')
                    .map(|code| {
                        IntegrationLocation::parse(code.trim()).map_err(|error| error.to_string())
                    })
                    .collect::<Result<_, _>>()?;
            }
            _ if arg.starts_with("--") => {
                return Err(format!("opção desconhecida: {arg}"));
            }
            _ => {
                if trip.is_some() {
                    return Err("informe apenas uma lista de serviços".to_owned());
                }
                trip = Some(
                    arg.split(',')
                        .map(|code| {
                            ServiceType::parse(code.trim()).map_err(|error| error.to_string())
                        })
                        .collect::<Result<_, _>>()?,
                );
            }
        }
    }

    let services = trip.ok_or_else(|| format!("nenhuma viagem informada\n\n{USAGE}"))?;

    let table = match &fares_path {
        Some(path) => FareTable::load(path).map_err(describe)?,
        None => bhtrans_tariff(),
    };

    let result = calculate_fare(&table, &services, &transfers).map_err(describe)?;
    print_trip(&table, &result);
    Ok(())
}

fn print_trip(table: &FareTable, result: &FareCalculation) {
    let metadata = table.metadata();
    if let Some(source) = &metadata.source {
        match metadata.effective_date {
            Some(date) => println!("Fonte: {source} (vigência {date})"),
            None => println!("Fonte: {source}"),
        }
        println!();
    }

    for (i, line) in result.breakdown().iter().enumerate() {
        let name = table.service_name(line.service);
        let location = match line.location {
            Some(IntegrationLocation::AtStation) => " (na estação)",
            Some(IntegrationLocation::OutsideStation) => " (fora da estação)",
            None => "",
        };
        println!(
            "{}º embarque: {name}{location} - {}",
            i + 1,
            line.fare.format_br()
        );
    }
    println!();
    println!("Total: {}", result.total_fare().format_br());
}

/// Renders an error with its chain of causes on one line.
fn describe(error: impl std::error::Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
