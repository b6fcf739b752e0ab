use super::{Description, Package, Service};

fn package(name: &str, features: &[&str]) -> Package {
    Package {
        name: name.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

fn service(name: &str, what: &str, how: &str, benefit: &str, basic: &str, advanced: &[&str]) -> Service {
    Service {
        name: name.to_string(),
        description: Description {
            what: what.to_string(),
            how: how.to_string(),
            benefit: benefit.to_string(),
        },
        packages: vec![
            package("Básico", &[basic]),
            package("Avanzado", advanced),
            package("Hiper Personalizado", &["Contacta para más detalles"]),
        ],
    }
}

pub(super) fn builtin_services() -> Vec<Service> {
    vec![
        service(
            "Organizador de Inventarios",
            "Es una herramienta que ayuda a las empresas a gestionar su inventario de manera más eficiente. Usa inteligencia artificial para predecir qué productos se venderán más y cuándo es necesario reabastecerlos.",
            "Analiza datos de ventas pasadas y patrones de compra para anticiparse a la demanda de productos. Así, las empresas evitan quedarse sin stock o tener productos acumulados que no se venden.",
            "Ahorra dinero y tiempo al evitar compras innecesarias y permite tener siempre disponibles los productos que más se necesitan.",
            "Predicción de demanda",
            &[
                "Predicción de demanda",
                "Clasificación de productos",
                "Optimización de inventario",
            ],
        ),
        service(
            "Automatización de Facturación Inteligente",
            "Este servicio genera automáticamente las facturas de las ventas de la empresa, evitando errores y facilitando el seguimiento de los pagos.",
            "El sistema toma la información de las ventas y crea las facturas correspondientes de manera rápida y automática. Además, organiza y clasifica las facturas para que siempre estén accesibles.",
            "Reduce el tiempo que se dedica a la facturación manual y mejora el control de los documentos financieros, evitando errores comunes en el proceso.",
            "Generación automática de facturas basadas en ventas",
            &[
                "Generación automática de facturas basadas en ventas",
                "Clasificación de facturas y organización de pagos",
                "Detección de facturas duplicadas o erróneas",
            ],
        ),
        service(
            "Scraping Inteligente de Competencia",
            "Es una herramienta que rastrea automáticamente los precios y la disponibilidad de productos en los sitios web de la competencia, para que la empresa pueda mantenerse al día con el mercado.",
            "El sistema busca información en tiempo real de los competidores y genera informes comparativos sobre precios y promociones.",
            "Permite ajustar los precios y estrategias de ventas según lo que está haciendo la competencia, lo que ayuda a mantenerse competitivo sin tener que realizar búsquedas manuales.",
            "Rastreo de cambios de precios y productos de competidores",
            &[
                "Rastreo de cambios de precios y productos de competidores",
                "Análisis comparativo de precios y tendencias de productos",
                "Alertas sobre cambios significativos",
            ],
        ),
        service(
            "Automatización de Procesos de Recursos Humanos",
            "Este servicio automatiza tareas comunes del área de recursos humanos, como la clasificación de currículums y la selección de candidatos.",
            "El sistema analiza automáticamente los currículums que llegan a la empresa y selecciona los que mejor se ajustan a las necesidades del puesto. También puede generar informes sobre el proceso de contratación.",
            "Acelera el proceso de contratación, ayudando a encontrar a los mejores candidatos de forma más rápida y eficiente, y reduciendo la carga de trabajo del equipo de recursos humanos.",
            "Clasificación de CVs basados en experiencia, habilidades y palabras clave",
            &[
                "Clasificación de CVs basados en experiencia, habilidades y palabras clave",
                "Sugerencias de candidatos ideales",
                "Reportes de eficiencia de contratación",
            ],
        ),
    ]
}
