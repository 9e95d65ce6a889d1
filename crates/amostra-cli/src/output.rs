//! Output formatting for CLI responses.

use amostra_types::Sample;

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("[OK] {message}");
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    println!("[!] {message}");
}

/// Prints a compact table of samples.
pub fn print_table(samples: &[Sample]) {
    println!(
        "{:>5}  {:<16}  {:<14}  {:<14}  {:<10}  {:<10}",
        "id", "codigo", "categoria", "fabricante", "status", "saida"
    );
    println!("{}", "─".repeat(80));
    for sample in samples {
        let f = &sample.fields;
        println!(
            "{:>5}  {:<16}  {:<14}  {:<14}  {:<10}  {:<10}",
            sample.id,
            f.codigo,
            f.categoria,
            f.fabricante,
            f.status,
            f.data_saida
        );
    }
}

/// Prints a single sample in full.
pub fn print_sample(sample: &Sample) {
    let f = &sample.fields;
    println!("Amostra #{}", sample.id);
    println!("{}", "─".repeat(40));
    println!("  Categoria          : {}", f.categoria);
    println!("  Fabricante         : {}", f.fabricante);
    println!("  Codigo             : {}", f.codigo);
    println!("  PN Fabricante      : {}", f.pn_fabricante);
    println!("  PN Intelbras       : {}", f.pn_intelbras);
    println!("  SN                 : {}", f.sn);
    println!("  Tipo Amostra       : {}", f.tipo_amostra);
    println!("  Status             : {}", f.status);
    println!("  Localizacao        : {}", f.localizacao);
    println!("  Projeto/POC/Evento : {}", f.projeto_poc_evento);
    println!("  Responsavel        : {}", f.responsavel);
    println!("  Data de Saida      : {}", f.data_saida);
    match f.data_retorno {
        Some(date) => println!("  Data de Retorno    : {date}"),
        None => println!("  Data de Retorno    : -"),
    }
    if let Some(obs) = &f.observacoes {
        println!("  Observacoes        : {obs}");
    }
}
