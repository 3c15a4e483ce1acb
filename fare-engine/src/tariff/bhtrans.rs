//! Built-in tariff data for the Belo Horizonte network.

use chrono::NaiveDate;

use crate::domain::{FareAmount, ServiceType};
use crate::tariff::table::FareTable;

const fn centavos(value: u64) -> FareAmount {
    FareAmount::from_centavos(value)
}

/// The BHTrans tariff-integration matrix, as published for 2025.
///
/// Fares are in centavos. Pairs the published matrix leaves blank (for
/// example a circular line onto the metro) are omitted here as well; the
/// table prices those transfers by the unitary-fare fallback.
pub fn bhtrans_tariff() -> FareTable {
    use ServiceType::*;

    FareTable::builder()
        // Unitary fares
        .service(
            TroncaisMove,
            "Troncais MOVE",
            "Linhas troncais do BRT MOVE, embarque nas estações",
            centavos(575),
        )
        .service(
            TroncaisConvencionais,
            "Troncais Convencionais",
            "Linhas troncais convencionais",
            centavos(575),
        )
        .service(
            Estruturais,
            "Estruturais",
            "Linhas estruturais, ligação entre regiões sem passar pelo centro",
            centavos(575),
        )
        .service(
            Alimentadoras,
            "Alimentadoras",
            "Linhas alimentadoras das estações do MOVE",
            centavos(425),
        )
        .service(
            Circular,
            "Circular",
            "Linhas circulares da área central",
            centavos(300),
        )
        .service(
            VilasFavelas,
            "Vilas e Favelas",
            "Linhas de vilas e favelas, serviço gratuito",
            centavos(0),
        )
        .service(
            Metro,
            "Metrô",
            "Linha 1 do metrô de Belo Horizonte",
            centavos(425),
        )
        // After a MOVE trunk leg: station transfers are free, street
        // transfers pay the integration supplement
        .integration(TroncaisMove, TroncaisMove, centavos(0))
        .located_integration(TroncaisMove, TroncaisConvencionais, centavos(0), centavos(290))
        .located_integration(TroncaisMove, Estruturais, centavos(0), centavos(290))
        .located_integration(TroncaisMove, Alimentadoras, centavos(0), centavos(215))
        .integration(TroncaisMove, Circular, centavos(150))
        .integration(TroncaisMove, VilasFavelas, centavos(0))
        .integration(TroncaisMove, Metro, centavos(250))
        // After a conventional trunk leg: same supplements as MOVE
        .integration(TroncaisConvencionais, TroncaisMove, centavos(0))
        .located_integration(
            TroncaisConvencionais,
            TroncaisConvencionais,
            centavos(0),
            centavos(290),
        )
        .located_integration(TroncaisConvencionais, Estruturais, centavos(0), centavos(290))
        .located_integration(TroncaisConvencionais, Alimentadoras, centavos(0), centavos(215))
        .integration(TroncaisConvencionais, Circular, centavos(150))
        .integration(TroncaisConvencionais, VilasFavelas, centavos(0))
        .integration(TroncaisConvencionais, Metro, centavos(250))
        // After a structural leg: same supplements as MOVE
        .integration(Estruturais, TroncaisMove, centavos(0))
        .located_integration(Estruturais, TroncaisConvencionais, centavos(0), centavos(290))
        .located_integration(Estruturais, Estruturais, centavos(0), centavos(290))
        .located_integration(Estruturais, Alimentadoras, centavos(0), centavos(215))
        .integration(Estruturais, Circular, centavos(150))
        .integration(Estruturais, VilasFavelas, centavos(0))
        .integration(Estruturais, Metro, centavos(250))
        // After a feeder leg: trunk boardings pay the feeder complement
        .integration(Alimentadoras, TroncaisMove, centavos(150))
        .located_integration(Alimentadoras, TroncaisConvencionais, centavos(150), centavos(360))
        .located_integration(Alimentadoras, Estruturais, centavos(150), centavos(360))
        .located_integration(Alimentadoras, Alimentadoras, centavos(0), centavos(215))
        .integration(Alimentadoras, Circular, centavos(150))
        .integration(Alimentadoras, VilasFavelas, centavos(0))
        .integration(Alimentadoras, Metro, centavos(250))
        // After a circular leg; the circular onto metro pair is unpublished
        .integration(Circular, TroncaisMove, centavos(290))
        .located_integration(Circular, TroncaisConvencionais, centavos(290), centavos(430))
        .located_integration(Circular, Estruturais, centavos(290), centavos(430))
        .located_integration(Circular, Alimentadoras, centavos(150), centavos(215))
        .integration(Circular, Circular, centavos(0))
        .integration(Circular, VilasFavelas, centavos(0))
        // After a free vila/favela leg: onward boardings pay full price
        .integration(VilasFavelas, TroncaisMove, centavos(575))
        .located_integration(VilasFavelas, TroncaisConvencionais, centavos(575), centavos(575))
        .located_integration(VilasFavelas, Estruturais, centavos(575), centavos(575))
        .located_integration(VilasFavelas, Alimentadoras, centavos(425), centavos(425))
        .integration(VilasFavelas, VilasFavelas, centavos(0))
        // After a metro leg: bus boardings priced like leaving a station
        .integration(Metro, TroncaisMove, centavos(150))
        .located_integration(Metro, TroncaisConvencionais, centavos(150), centavos(360))
        .located_integration(Metro, Estruturais, centavos(150), centavos(360))
        .located_integration(Metro, Alimentadoras, centavos(0), centavos(215))
        .integration(Metro, Metro, centavos(0))
        .metropolitan_base(centavos(575))
        .metadata(
            "Matriz de integração tarifária BHTrans",
            NaiveDate::from_ymd_opt(2025, 1, 6),
        )
        .build()
}
