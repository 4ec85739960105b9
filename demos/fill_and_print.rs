use cowarray::Array2;

fn main()
{
    // create an array of f64, 4x5
    let mut arr = Array2::<f64>::zeros((4, 5));

    for i in 0..4 {
        for j in 0..5 {
            arr[(i, j)] = (i * 5 + j) as f64;
        }
    }

    for i in 0..4 {
        for j in 0..5 {
            println!("{}=={}", arr[(i, j)], i * 5 + j);
        }
    }
}
