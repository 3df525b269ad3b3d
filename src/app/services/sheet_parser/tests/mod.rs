//! Test utilities and fixtures for sheet parser testing
//!
//! This module provides fixture sheet content and helpers shared across the
//! parser test modules.


/// A small driver-summary sheet with canonical headers
pub fn create_test_summary_sheet() -> String {
    "\
Piloto,Corridas,Títulos,Construtores,Pódios,P1,P2,P3,Poles,Fast Laps,Top 10,Abandonos,DQ,Estreia,Ultima
Ayrton,50,3,2,20,10,6,4,5,7,40,4,1,2019,2024
Nelson,30,1,0,8,3,3,2,2,1,22,6,0,2020,2024
Rubens,12,0,0,0,0,0,0,0,0,7,3,0,2022,2023
"
    .to_string()
}

/// A participation sheet exercising quoting, separators, and short rows
pub fn create_test_participation_sheet() -> String {
    "\
Piloto,Pista,Liga,Temporada,Categoria,Ano,Final,Pole,Best Lap,Hat-Trick,Chelem,Piloto Campeao,Construtores,Equipe,Link Transmissao
Ayrton,Interlagos,GRL,Temporada 7,F1,2023,1,SIM,SIM,SIM,,,,\"Equipe Azul, Ltda\",https://a.example||https://b.example
Ayrton,Interlagos 2,GRL,Temporada 7,F1,2023,2,,,,,,,Equipe Azul
,,,,,,,,,,,,,,
Ayrton,Spa II,GRL,Temporada 8,F1,2024,DNF,,,,,SIM,TIME,Equipe Azul
Nelson,Monza,GRL,Temporada 8,F1,2024,4
"
    .to_string()
}

/// The same summary sheet but with unaccented lower-case header variants
/// and a leading BOM, as produced by some exports
pub fn create_aliased_summary_sheet() -> String {
    "\u{feff}\
piloto,corridas,Titulos,construtores,podios,p1,p2,p3,poles,fast laps,top 10,abandonos,dq,estreia,Ultima
Ayrton,50,3,2,20,10,6,4,5,7,40,4,1,2019,2024
"
    .to_string()
}
