use anyhow::Result;
use dense_matrix::{Matrix, NumericConfig, SingularityCheck};

fn main() -> Result<()> {
    env_logger::init();

    let m = Matrix::from_rows(&[[2.0, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]])?;
    println!("M =\n{}", m);
    println!("det(M) = {}", m.determinant()?);
    println!("cofactors(M) =\n{}", m.cofactors()?);

    let inv = m.inverse()?;
    println!("inverse(M) =\n{}", inv);

    let product = (&m * &inv)?;
    println!("M * inverse(M) =\n{}", product);
    println!("equals identity: {}", product == Matrix::identity(3)?);

    let singular = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])?;
    match singular.inverse() {
        Ok(_) => println!("unexpected inverse"),
        Err(err) => println!("singular input: {}", err),
    }

    let check: SingularityCheck = "tolerance".parse().map_err(anyhow::Error::msg)?;
    let loose = NumericConfig::new(1e-7, check);
    let nearly = Matrix::from_rows(&[[1.0, 1.0], [1.0, 1.0 + 1e-9]])?;
    println!("near-singular with exact check: {}", nearly.inverse().is_ok());
    println!("near-singular with tolerance check: {}", nearly.inverse_with(&loose).is_ok());

    Ok(())
}
