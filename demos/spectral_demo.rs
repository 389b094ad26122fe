use densegraph::{DenseMatrix, FaerEigenSolver};
use std::sync::Arc;

fn main() -> Result<(), densegraph::MatError> {
    // star on 4 vertices, centre 1
    let star = DenseMatrix::<f64>::from_edge_list_str("4 4\n6\n1 2\n2 1\n1 3\n3 1\n1 4\n4 1\n")?
        .with_eigen_solver(Arc::new(FaerEigenSolver));
    print!("{star}");
    println!("degrees = {:?}", star.row_sums());
    println!("neighbours of 0 = {:?}", star.neighbors(0)?);

    // graph product: star (x) single edge
    let edge = DenseMatrix::from_row_major(2, 2, vec![0.0, 1.0, 1.0, 0.0])?;
    let product = star.kron(&edge)?;
    println!("product is {}x{}", product.nrows(), product.ncols());

    // keep one copy of every star vertex; the edge factor has no self-loops, so no edges survive
    let mask: Vec<bool> = (0..product.nrows()).map(|i| i % 2 == 0).collect();
    let coarse = product.scattered_selection(&mask, &mask)?;
    println!("coarse nnz = {}", coarse.nnz());

    println!("top eigenvector = {:?}", star.top_eigenvector()?);
    Ok(())
}
