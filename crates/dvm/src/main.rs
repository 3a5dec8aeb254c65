use anyhow::Context;
use dvm::{ErrorPolicy, Matrix};

fn main() -> anyhow::Result<()> {
    dvm::init_logger!();

    #[rustfmt::skip]
    let mat: Matrix<f32, 5, 5> = Matrix::from_rows([
        [ 1.0,  4.0, 2.0,  3.0,  4.0],
        [ 6.0,  8.0, 1.0, -5.0, -3.0],
        [ 1.0, -4.0, 2.0, -6.0,  4.0],
        [-5.0,  3.0, 0.0,  1.0, -5.0],
        [ 2.0, -6.0, 3.0,  9.0, -6.0],
    ]);

    let policy = ErrorPolicy::global();
    log::debug!("inverting {:?}", mat);

    println!("matrix:\n{}", mat);
    println!("determinant: {}", mat.determinant());

    let inverse = policy
        .resolve(mat.guarded_inverse())
        .context("failed to invert matrix")?;
    println!("inverse:\n{:.5}", inverse);

    Ok(())
}
