//! Pre-written candidate positions per country problem.
//!
//! Keyed by problem *title* as served by the API; titles with no entry simply
//! show no responses.

#[cfg(test)]
#[path = "responses_test.rs"]
mod responses_test;

/// One candidate's canned position on a problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateResponse {
    pub candidate_id: u32,
    pub candidate_name: &'static str,
    pub party: &'static str,
    pub image: &'static str,
    pub response: &'static str,
}

impl CandidateResponse {
    /// First word of the candidate's name, used in "Chatear con ..." links.
    pub fn first_name(&self) -> &'static str {
        self.candidate_name.split(' ').next().unwrap_or(self.candidate_name)
    }
}

const AVATAR: &str = "/placeholder.svg?height=80&width=80";

const FUEL: &[CandidateResponse] = &[
    CandidateResponse {
        candidate_id: 1,
        candidate_name: "Ana García",
        party: "Partido Verde",
        image: AVATAR,
        response: "Promoveré la transición hacia vehículos eléctricos con subsidios y una red nacional de carga, \
                   reduciendo nuestra dependencia de combustibles fósiles.",
    },
    CandidateResponse {
        candidate_id: 2,
        candidate_name: "Carlos López",
        party: "Partido Rojo",
        image: AVATAR,
        response: "Mantendré subsidios focalizados para el transporte público y trabajadores, mientras negocio \
                   mejores precios con proveedores internacionales.",
    },
    CandidateResponse {
        candidate_id: 3,
        candidate_name: "María Rodríguez",
        party: "Partido Amarillo",
        image: AVATAR,
        response: "Desarrollaré una plataforma digital para optimizar la distribución de combustibles y reducir \
                   costos operativos que se trasladen al consumidor.",
    },
    CandidateResponse {
        candidate_id: 4,
        candidate_name: "José Martínez",
        party: "Partido Verde",
        image: AVATAR,
        response: "Invertiré en refinación nacional y biocombustibles para reducir importaciones y crear empleos \
                   verdes en el sector energético.",
    },
    CandidateResponse {
        candidate_id: 5,
        candidate_name: "Laura Sánchez",
        party: "Partido Rojo",
        image: AVATAR,
        response: "Implementaré un sistema de precios justos que proteja tanto a consumidores como a \
                   distribuidores, con transparencia total en la cadena de costos.",
    },
];

const DOLLAR: &[CandidateResponse] = &[
    CandidateResponse {
        candidate_id: 1,
        candidate_name: "Ana García",
        party: "Partido Verde",
        image: AVATAR,
        response: "Propongo una política monetaria sostenible que fortalezca nuestra moneda a través de \
                   inversiones en energías renovables y exportación de productos verdes.",
    },
    CandidateResponse {
        candidate_id: 2,
        candidate_name: "Carlos López",
        party: "Partido Rojo",
        image: AVATAR,
        response: "Mi plan incluye controles de cambio temporales y un programa de estabilización económica que \
                   proteja a las familias trabajadoras del impacto del dólar.",
    },
    CandidateResponse {
        candidate_id: 3,
        candidate_name: "María Rodríguez",
        party: "Partido Amarillo",
        image: AVATAR,
        response: "Implementaré un sistema de bandas cambiarias inteligente respaldado por tecnología blockchain \
                   para mayor transparencia y estabilidad.",
    },
    CandidateResponse {
        candidate_id: 4,
        candidate_name: "José Martínez",
        party: "Partido Verde",
        image: AVATAR,
        response: "Fomentaré la desdolarización gradual promoviendo el uso de nuestra moneda nacional en sectores \
                   clave como salud y educación.",
    },
    CandidateResponse {
        candidate_id: 5,
        candidate_name: "Laura Sánchez",
        party: "Partido Rojo",
        image: AVATAR,
        response: "Estableceré un fondo de estabilización cambiaria financiado con recursos de la lucha contra \
                   la corrupción y mejora en la recaudación fiscal.",
    },
];

/// Responses for the problem titled `title`, in display order.
pub fn responses_for(title: &str) -> &'static [CandidateResponse] {
    match title {
        "Combustible" => FUEL,
        "El Dólar" => DOLLAR,
        _ => &[],
    }
}
